pub mod aggregate;

pub use aggregate::{Consultant, ConsultantField, ConsultantSort};
