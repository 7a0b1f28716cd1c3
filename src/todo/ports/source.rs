//! Port for the paginated, read-only remote todo collection.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU32;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote todo source operations.
pub type TodoSourceResult<T> = Result<T, TodoSourceError>;

/// One page request: a 1-based page number and a page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    page: NonZeroU32,
    limit: NonZeroU32,
}

impl PageRequest {
    /// Creates a page request.
    #[must_use]
    pub const fn new(page: NonZeroU32, limit: NonZeroU32) -> Self {
        Self { page, limit }
    }

    /// Request for the first page.
    #[must_use]
    pub const fn first(limit: NonZeroU32) -> Self {
        Self::new(NonZeroU32::MIN, limit)
    }

    /// Request for the page following this one, or `None` on overflow.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.page.checked_add(1).map(|page| Self { page, ..self })
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(self) -> NonZeroU32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn limit(self) -> NonZeroU32 {
        self.limit
    }
}

/// Todo record as served by the remote collection.
///
/// The remote `completed` flag is decoded but ignored on import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteTodo {
    /// Source-assigned identifier.
    pub id: u64,
    /// Owning user.
    pub user_id: u64,
    /// Display title, accepted as-is.
    pub title: String,
    /// Completion flag reported by the source.
    #[serde(default)]
    pub completed: bool,
}

/// Paginated todo source contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoSource: Send + Sync {
    /// Fetches one page of todos. An empty page means no further pages.
    ///
    /// # Errors
    ///
    /// Returns [`TodoSourceError`] when the request cannot be sent, the
    /// source answers with a failure status, or the body cannot be decoded.
    async fn fetch_page(&self, request: PageRequest) -> TodoSourceResult<Vec<RemoteTodo>>;
}

/// Errors returned by todo source adapters.
#[derive(Debug, Clone, Error)]
pub enum TodoSourceError {
    /// The request could not be built or sent.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The source answered with a non-success status.
    #[error("todo source returned status {0}")]
    Status(u16),

    /// The response body was not a todo array.
    #[error("decode error: {0}")]
    Decode(Arc<dyn std::error::Error + Send + Sync>),
}

impl TodoSourceError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Wraps a decoding error.
    pub fn decode(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Decode(Arc::new(err))
    }
}
