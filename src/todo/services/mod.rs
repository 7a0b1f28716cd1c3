//! Application services: remote loading, paging, and the list controller.

mod board;
mod editor;
mod loader;
mod pagination;

pub use board::{LOCAL_USER, TodoBoard};
pub use editor::{EditorMode, EditorOutcome, EditorRequest};
pub use loader::{PageOutcome, RemoteLoader};
pub use pagination::{FetchState, Pagination};
