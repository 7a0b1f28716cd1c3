//! In-memory todo source for tests and offline use.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::todo::ports::{PageRequest, RemoteTodo, TodoSource, TodoSourceError, TodoSourceResult};

/// Thread-safe in-memory todo source.
///
/// The catalog is paginated the way `json-server` does: page `n` of size
/// `k` holds records `(n - 1) * k .. n * k`, and a page past the end is
/// empty. Individual pages can be scripted to fail.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTodoSource {
    state: Arc<RwLock<InMemorySourceState>>,
}

#[derive(Debug, Default)]
struct InMemorySourceState {
    catalog: Vec<RemoteTodo>,
    failing_pages: HashMap<u32, String>,
    requests: Vec<PageRequest>,
}

fn lock_error(err: impl std::fmt::Display) -> TodoSourceError {
    TodoSourceError::transport(std::io::Error::other(err.to_string()))
}

impl InMemoryTodoSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source serving `catalog`.
    #[must_use]
    pub fn with_catalog(catalog: impl IntoIterator<Item = RemoteTodo>) -> Self {
        let source = Self::default();
        if let Ok(mut state) = source.state.write() {
            state.catalog = catalog.into_iter().collect();
        }
        source
    }

    /// Creates a source serving `count` generated todos with ids `1..=count`.
    #[must_use]
    pub fn generated(count: u64) -> Self {
        Self::with_catalog((1..=count).map(|id| RemoteTodo {
            id,
            user_id: id.div_ceil(20),
            title: format!("remote todo {id}"),
            completed: id % 2 == 0,
        }))
    }

    /// Makes every later request for `page` fail with a transport error.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn fail_page(&self, page: u32, message: impl Into<String>) -> TodoSourceResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failing_pages.insert(page, message.into());
        Ok(())
    }

    /// Clears every scripted failure.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn heal(&self) -> TodoSourceResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.failing_pages.clear();
        Ok(())
    }

    /// Returns every request received so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a transport error when lock acquisition fails.
    pub fn requests(&self) -> TodoSourceResult<Vec<PageRequest>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.requests.clone())
    }
}

#[async_trait]
impl TodoSource for InMemoryTodoSource {
    async fn fetch_page(&self, request: PageRequest) -> TodoSourceResult<Vec<RemoteTodo>> {
        let mut state = self.state.write().map_err(lock_error)?;
        state.requests.push(request);

        if let Some(message) = state.failing_pages.get(&request.page().get()) {
            return Err(TodoSourceError::transport(std::io::Error::other(
                message.clone(),
            )));
        }

        let limit = u64::from(request.limit().get());
        let offset = u64::from(request.page().get() - 1) * limit;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(state.catalog.iter().skip(skip).take(take).cloned().collect())
    }
}
