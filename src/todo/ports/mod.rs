//! Port contracts for the todo list.
//!
//! Ports define infrastructure-agnostic interfaces used by todo services.

pub mod source;

pub use source::{PageRequest, RemoteTodo, TodoSource, TodoSourceError, TodoSourceResult};

#[cfg(test)]
pub use source::MockTodoSource;
