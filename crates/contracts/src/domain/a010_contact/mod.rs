pub mod aggregate;

pub use aggregate::{ContactForm, ContactMessage};
