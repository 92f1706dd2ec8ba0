pub mod aggregate;

pub use aggregate::{CompanyRef, JobVacancy, JobVacancyField, JobVacancySort, VacancyStatus};
