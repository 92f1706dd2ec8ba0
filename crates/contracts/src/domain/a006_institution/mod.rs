pub mod aggregate;

pub use aggregate::{Institution, InstitutionField, InstitutionSort, InstitutionType};
