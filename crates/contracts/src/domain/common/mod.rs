//! Common types and traits for all directory records

pub mod firm;
pub mod lenient;
pub mod record_id;
pub mod resource;

// Re-exports
pub use firm::FirmProfile;
pub use record_id::RecordId;
pub use resource::{visible_only, Resource};
