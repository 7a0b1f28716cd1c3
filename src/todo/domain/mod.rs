//! Domain model for the todo list.
//!
//! The domain owns the todo entity, the in-memory store that mediates every
//! mutation, and the pure projections used for display. Nothing here
//! performs I/O.

mod error;
mod ids;
mod store;
mod todo;
mod view;

pub use error::{ParseViewOptionError, TodoDomainError};
pub use ids::{TodoId, TodoTitle, UserId};
pub use store::{CommandOutcome, NewTodo, TodoCommand, TodoEdit, TodoStore};
pub use todo::{Todo, TodoParts};
pub use view::{TodoFilter, TodoSort, TodoSummary, format_timestamp, project};
