pub mod admin_crud;
pub mod api;
pub mod detail;
pub mod listing;
pub mod validation;
