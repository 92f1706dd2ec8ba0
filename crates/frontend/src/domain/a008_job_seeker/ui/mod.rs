pub mod admin;
pub mod details;
pub mod list;
