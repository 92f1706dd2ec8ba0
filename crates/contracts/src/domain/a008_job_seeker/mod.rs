pub mod aggregate;
pub mod form;

pub use aggregate::{JobSeeker, JobSeekerField, JobSeekerSort, WorkHistoryEntry};
pub use form::{JobSeekerForm, JobSeekerPayload};
