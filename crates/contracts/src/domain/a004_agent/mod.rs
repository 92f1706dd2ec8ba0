pub mod aggregate;

pub use aggregate::{Agent, AgentField, AgentRole, AgentSort};
