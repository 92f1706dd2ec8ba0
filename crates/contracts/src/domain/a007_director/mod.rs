pub mod aggregate;

pub use aggregate::{Director, DirectorField, DirectorSort, DirectorStatus};
