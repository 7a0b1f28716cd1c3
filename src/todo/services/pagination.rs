//! Caller-owned paging cursor with a single in-flight request guard.

use super::PageOutcome;
use crate::todo::ports::PageRequest;
use std::num::NonZeroU32;

/// Whether a page request is currently outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchState {
    /// No request is outstanding.
    #[default]
    Idle,
    /// A request has been granted and not yet finished.
    Loading,
}

/// Paging cursor: last requested page, whether more pages may exist, and
/// the in-flight guard.
///
/// At most one request is granted at a time; a second `begin_*` call before
/// [`Pagination::finish`] is refused. A failed or empty page stops paging
/// until [`Pagination::begin_refresh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    page_size: NonZeroU32,
    current: Option<PageRequest>,
    has_more: bool,
    fetch: FetchState,
}

impl Pagination {
    /// Creates a cursor positioned before the first page.
    #[must_use]
    pub const fn new(page_size: NonZeroU32) -> Self {
        Self {
            page_size,
            current: None,
            has_more: true,
            fetch: FetchState::Idle,
        }
    }

    /// Returns the last requested page number, or `0` before any request.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.current.map_or(0, |request| request.page().get())
    }

    /// Returns the configured page size.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroU32 {
        self.page_size
    }

    /// Returns whether another page may exist.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Returns the in-flight state.
    #[must_use]
    pub const fn fetch_state(&self) -> FetchState {
        self.fetch
    }

    /// Returns `true` while a request is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.fetch, FetchState::Loading)
    }

    /// Grants a request for the first page unless one is already in flight.
    ///
    /// The first page is always allowed, even after paging stopped.
    pub fn begin_first(&mut self) -> Option<PageRequest> {
        if self.is_loading() {
            return None;
        }
        Some(self.grant(PageRequest::first(self.page_size)))
    }

    /// Grants a request for the page after the current one.
    ///
    /// Refused while a request is in flight, after paging stopped, or
    /// before the first page was requested.
    pub fn begin_next(&mut self) -> Option<PageRequest> {
        if self.is_loading() || !self.has_more {
            return None;
        }
        let next = self.current?.next()?;
        Some(self.grant(next))
    }

    /// Rewinds to page 1, re-enables paging, and grants the first page.
    ///
    /// Refused (without rewinding) while a request is in flight.
    pub fn begin_refresh(&mut self) -> Option<PageRequest> {
        if self.is_loading() {
            return None;
        }
        self.has_more = true;
        self.begin_first()
    }

    /// Records the outcome of the granted request and releases the guard.
    pub fn finish(&mut self, outcome: &PageOutcome) {
        self.fetch = FetchState::Idle;
        self.has_more = outcome.has_more();
    }

    fn grant(&mut self, request: PageRequest) -> PageRequest {
        self.current = Some(request);
        self.fetch = FetchState::Loading;
        request
    }
}
