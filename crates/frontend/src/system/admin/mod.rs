//! Admin panel: dashboard, per-resource lists and the job seeker CRUD screen

pub mod dashboard;
pub mod layout;
pub mod resource_list;
