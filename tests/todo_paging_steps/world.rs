//! Shared world state for todo paging BDD scenarios.

use std::num::NonZeroU32;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use todos::config::TodoConfig;
use todos::todo::{
    adapters::memory::InMemoryTodoSource,
    domain::{TodoDomainError, TodoId},
    services::{PageOutcome, TodoBoard},
};

/// Board type used by the BDD world.
pub type TestTodoBoard = TodoBoard<InMemoryTodoSource, DefaultClock>;

/// Scenario world for todo paging behaviour tests.
pub struct TodoPagingWorld {
    pub source: Arc<InMemoryTodoSource>,
    pub board: TestTodoBoard,
    pub last_load: Option<Option<PageOutcome>>,
    pub last_create: Option<Result<TodoId, TodoDomainError>>,
}

impl TodoPagingWorld {
    /// Creates a world backed by an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(InMemoryTodoSource::new(), NonZeroU32::MIN)
    }

    /// Creates a world backed by `source` with the given page size.
    #[must_use]
    pub fn with_source(source: InMemoryTodoSource, page_size: NonZeroU32) -> Self {
        let shared = Arc::new(source);
        let config = TodoConfig::default().with_page_size(page_size);
        let board = TodoBoard::new(Arc::clone(&shared), Arc::new(DefaultClock), &config);

        Self {
            source: shared,
            board,
            last_load: None,
            last_create: None,
        }
    }
}

impl Default for TodoPagingWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoPagingWorld {
    TodoPagingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
