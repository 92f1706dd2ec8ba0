pub mod resource_kind;

pub use resource_kind::ResourceKind;
