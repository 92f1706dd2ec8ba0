pub mod aggregate;

pub use aggregate::{Lecturer, LecturerField, LecturerSort};
