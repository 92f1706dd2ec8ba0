pub mod aggregate;

pub use aggregate::{Contractor, ContractorField, ContractorSort};
