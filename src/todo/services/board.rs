//! Headless list controller: store, paging, and the filter/sort selection.

use super::{EditorMode, EditorOutcome, EditorRequest, PageOutcome, Pagination, RemoteLoader};
use crate::config::TodoConfig;
use crate::todo::{
    domain::{
        CommandOutcome, NewTodo, Todo, TodoCommand, TodoDomainError, TodoEdit, TodoFilter,
        TodoId, TodoSort, TodoStore, TodoSummary, TodoTitle, UserId, project,
    },
    ports::{PageRequest, TodoSource},
};
use mockable::Clock;
use std::sync::Arc;

/// User id given to todos created through the board.
pub const LOCAL_USER: UserId = UserId::new(0);

/// Drives one todo list: owns the store, pages in remote todos, and keeps
/// the current filter and sort selection.
pub struct TodoBoard<S, C>
where
    S: TodoSource,
    C: Clock + Send + Sync,
{
    store: TodoStore,
    loader: RemoteLoader<S, C>,
    clock: Arc<C>,
    pagination: Pagination,
    filter: TodoFilter,
    sort: TodoSort,
}

impl<S, C> TodoBoard<S, C>
where
    S: TodoSource,
    C: Clock + Send + Sync,
{
    /// Creates a board with an empty store.
    #[must_use]
    pub fn new(source: Arc<S>, clock: Arc<C>, config: &TodoConfig) -> Self {
        let loader =
            RemoteLoader::new(source, Arc::clone(&clock)).with_strategy(config.import_strategy);
        Self {
            store: TodoStore::new(),
            loader,
            clock,
            pagination: Pagination::new(config.page_size),
            filter: TodoFilter::default(),
            sort: TodoSort::default(),
        }
    }

    /// Returns the store.
    #[must_use]
    pub const fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Returns the paging cursor.
    #[must_use]
    pub const fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> TodoFilter {
        self.filter
    }

    /// Returns the active sort key.
    #[must_use]
    pub const fn sort(&self) -> TodoSort {
        self.sort
    }

    /// Selects the filter.
    pub const fn set_filter(&mut self, filter: TodoFilter) {
        self.filter = filter;
    }

    /// Selects the sort key.
    pub const fn set_sort(&mut self, sort: TodoSort) {
        self.sort = sort;
    }

    /// Switches between id and recency ordering.
    pub const fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
    }

    /// Returns the filtered, sorted todos to display.
    #[must_use]
    pub fn visible(&self) -> Vec<&Todo> {
        project(self.store.todos(), self.filter, self.sort)
    }

    /// Returns completed and total counts over the whole store.
    #[must_use]
    pub fn summary(&self) -> TodoSummary {
        self.store.summary()
    }

    /// Loads the first page. Returns `None` when a request is in flight.
    pub async fn load_initial(&mut self) -> Option<PageOutcome> {
        let request = self.pagination.begin_first()?;
        Some(self.run(request).await)
    }

    /// Loads the next page.
    ///
    /// Returns `None` when paging has stopped, a request is in flight, no
    /// page was loaded yet, or a filter other than [`TodoFilter::All`] is
    /// active.
    pub async fn load_more(&mut self) -> Option<PageOutcome> {
        if self.filter != TodoFilter::All {
            return None;
        }
        let request = self.pagination.begin_next()?;
        Some(self.run(request).await)
    }

    /// Restarts paging from page 1. Returns `None` when a request is in
    /// flight.
    pub async fn refresh(&mut self) -> Option<PageOutcome> {
        let request = self.pagination.begin_refresh()?;
        Some(self.run(request).await)
    }

    async fn run(&mut self, request: PageRequest) -> PageOutcome {
        let outcome = self.loader.fetch_page(&mut self.store, request).await;
        self.pagination.finish(&outcome);
        outcome
    }

    /// Creates a local todo from raw input.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] when the input is blank; the
    /// store is unchanged.
    pub fn create(&mut self, title: &str) -> Result<TodoId, TodoDomainError> {
        let draft = NewTodo::new(title, LOCAL_USER)?;
        Ok(self.store.create(draft, &*self.clock))
    }

    /// Deletes a todo. Returns whether it existed.
    pub fn delete(&mut self, id: TodoId) -> bool {
        self.store.delete(id)
    }

    /// Toggles completion of a todo. Returns whether it existed.
    pub fn toggle_completed(&mut self, id: TodoId) -> bool {
        self.store.toggle_completed(id, &*self.clock)
    }

    /// Applies an arbitrary store command.
    pub fn dispatch(&mut self, command: TodoCommand) -> CommandOutcome {
        self.store.apply(command, &*self.clock)
    }

    /// Submits the editor: creates in create mode, retitles in edit mode.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] when the input is blank; the
    /// store is unchanged and the caller keeps the input.
    pub fn submit_editor(
        &mut self,
        request: &EditorRequest,
        input: &str,
    ) -> Result<EditorOutcome, TodoDomainError> {
        match request.mode() {
            EditorMode::Create => self.create(input).map(EditorOutcome::Created),
            EditorMode::Edit(id) => {
                let title = TodoTitle::new(input)?;
                let Some(todo) = self.store.get(id) else {
                    return Ok(EditorOutcome::Missing(id));
                };
                let edit = TodoEdit::retitle(todo, title);
                self.store.edit(edit, &*self.clock);
                Ok(EditorOutcome::Edited(id))
            }
        }
    }
}
