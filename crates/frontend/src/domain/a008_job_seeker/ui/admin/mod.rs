//! Admin screen for job seekers.
//!
//! Same MVVM split as the rest of the admin UI:
//! - model.rs: API calls
//! - view_model.rs: state and commands
//! - view.rs: Leptos components

mod model;
mod view;
mod view_model;

pub use view::JobSeekerAdmin;
pub use view_model::JobSeekerAdminViewModel;
