//! In-memory adapters for the todo list.

mod source;

pub use source::InMemoryTodoSource;
