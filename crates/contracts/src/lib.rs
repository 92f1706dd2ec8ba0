//! Shared types and logic for the MEP Hub directory.
//!
//! Everything here is platform independent so the pipeline, validation and
//! CRUD state machine can be tested on the host without a browser.

pub mod domain;
pub mod enums;
pub mod shared;
pub mod system;
