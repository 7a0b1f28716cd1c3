//! Page fetch-and-normalise routine feeding the store.

use crate::config::ImportStrategy;
use crate::todo::{
    domain::{Todo, TodoId, TodoStore, UserId},
    ports::{PageRequest, RemoteTodo, TodoSource, TodoSourceError},
};
use mockable::Clock;
use std::sync::Arc;

/// Result of fetching one page.
#[derive(Debug, Clone)]
pub enum PageOutcome {
    /// A non-empty page was received and written into the store.
    Loaded {
        /// Records in the page.
        received: usize,
        /// Todos actually added to the store.
        added: usize,
    },
    /// The page was empty; there are no further pages.
    Exhausted,
    /// The request failed; the store was left untouched.
    Failed(TodoSourceError),
}

impl PageOutcome {
    /// Returns `true` when another page may exist.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Fetches pages from a [`TodoSource`] and writes them into a store.
///
/// The loader holds no pagination state; the caller decides which page to
/// request and when.
#[derive(Clone)]
pub struct RemoteLoader<S, C>
where
    S: TodoSource,
    C: Clock + Send + Sync,
{
    source: Arc<S>,
    clock: Arc<C>,
    strategy: ImportStrategy,
}

impl<S, C> RemoteLoader<S, C>
where
    S: TodoSource,
    C: Clock + Send + Sync,
{
    /// Creates a loader that merges fetched pages.
    #[must_use]
    pub const fn new(source: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            source,
            clock,
            strategy: ImportStrategy::Merge,
        }
    }

    /// Sets how fetched pages are written into the store.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: ImportStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured import strategy.
    #[must_use]
    pub const fn strategy(&self) -> ImportStrategy {
        self.strategy
    }

    /// Maps remote records into fresh, incomplete todos stamped now.
    #[must_use]
    pub fn normalize(&self, records: Vec<RemoteTodo>) -> Vec<Todo> {
        records
            .into_iter()
            .map(|record| {
                Todo::imported(
                    TodoId::remote(record.id),
                    UserId::new(record.user_id),
                    record.title,
                    &*self.clock,
                )
            })
            .collect()
    }

    /// Fetches one page and writes it into `store`.
    ///
    /// Failures never propagate: they are logged and reported as
    /// [`PageOutcome::Failed`] with the store unchanged. An empty page
    /// leaves the store unchanged as well.
    pub async fn fetch_page(&self, store: &mut TodoStore, request: PageRequest) -> PageOutcome {
        tracing::debug!(
            page = request.page().get(),
            limit = request.limit().get(),
            "fetching todo page"
        );

        let records = match self.source.fetch_page(request).await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(page = request.page().get(), error = %err, "todo page fetch failed");
                return PageOutcome::Failed(err);
            }
        };

        if records.is_empty() {
            tracing::debug!(page = request.page().get(), "todo source exhausted");
            return PageOutcome::Exhausted;
        }

        let received = records.len();
        let todos = self.normalize(records);
        let added = match self.strategy {
            ImportStrategy::Merge => store.merge_batch(todos),
            ImportStrategy::Replace => store.replace_all(todos),
        };
        tracing::info!(
            page = request.page().get(),
            received,
            added,
            strategy = self.strategy.as_str(),
            "todo page imported"
        );
        PageOutcome::Loaded { received, added }
    }
}
