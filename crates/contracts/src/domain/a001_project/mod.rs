pub mod aggregate;

pub use aggregate::{Project, ProjectField, ProjectSort};
