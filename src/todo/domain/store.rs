//! Owned, in-memory todo collection and its mutation commands.
//!
//! The store is the only holder of [`Todo`] values. Callers own the store
//! instance and pass it to whatever needs it; there is no process-wide
//! singleton. Every operation is synchronous and an unknown id is a silent
//! no-op, since a todo may legitimately disappear before a stale request
//! reaches the store.

use super::{Todo, TodoDomainError, TodoId, TodoSummary, TodoTitle, UserId};
use mockable::Clock;
use std::collections::HashSet;

/// Validated input for creating a local todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    title: TodoTitle,
    user_id: UserId,
}

impl NewTodo {
    /// Creates a draft from raw user input.
    ///
    /// # Errors
    ///
    /// Returns [`TodoDomainError::EmptyTitle`] when the title is blank.
    pub fn new(title: impl Into<String>, user_id: UserId) -> Result<Self, TodoDomainError> {
        Ok(Self {
            title: TodoTitle::new(title)?,
            user_id,
        })
    }

    /// Returns the validated title.
    #[must_use]
    pub const fn title(&self) -> &TodoTitle {
        &self.title
    }
}

/// Replacement values for an existing todo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoEdit {
    /// Todo to edit.
    pub id: TodoId,
    /// New title.
    pub title: TodoTitle,
    /// New completion flag.
    pub completed: bool,
    /// New owning user.
    pub user_id: UserId,
}

impl TodoEdit {
    /// Builds an edit that changes only the title of `todo`.
    #[must_use]
    pub const fn retitle(todo: &Todo, title: TodoTitle) -> Self {
        Self {
            id: todo.id(),
            title,
            completed: todo.is_completed(),
            user_id: todo.user_id(),
        }
    }
}

/// Closed set of store mutations, each carrying only what it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    /// Append todos whose ids are not yet present.
    Merge(Vec<Todo>),
    /// Discard the collection and install the given todos.
    Replace(Vec<Todo>),
    /// Create a local todo.
    Create(NewTodo),
    /// Remove a todo by id.
    Delete(TodoId),
    /// Overwrite the editable fields of a todo.
    Edit(TodoEdit),
    /// Flip the completion flag of a todo.
    Toggle(TodoId),
}

/// Result of applying a [`TodoCommand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Number of todos added by a merge.
    Merged(usize),
    /// Collection size after a replace.
    Replaced(usize),
    /// Identifier assigned to the created todo.
    Created(TodoId),
    /// Whether the command found its target todo.
    Applied(bool),
}

/// Owned collection of todos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_local_id: u64,
}

impl TodoStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every todo in insertion order.
    #[must_use]
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Finds a todo by id.
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id() == id)
    }

    /// Returns the number of todos held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Returns `true` when the store holds no todos.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Returns completed and total counts.
    #[must_use]
    pub fn summary(&self) -> TodoSummary {
        TodoSummary::of(&self.todos)
    }

    /// Restores the freshly initialised state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Appends every incoming todo whose id is not already present.
    ///
    /// Existing todos are never overwritten. Repeated ids inside `incoming`
    /// keep their first occurrence. Returns the number of todos added.
    pub fn merge_batch(&mut self, incoming: impl IntoIterator<Item = Todo>) -> usize {
        let mut seen: HashSet<TodoId> = self.todos.iter().map(Todo::id).collect();
        let before = self.todos.len();
        self.todos.extend(incoming.into_iter().filter(|todo| seen.insert(todo.id())));
        self.todos.len() - before
    }

    /// Discards the current collection and installs `incoming` instead.
    ///
    /// Repeated ids inside `incoming` keep their first occurrence. The local
    /// id sequence is not rewound. Returns the new collection size.
    pub fn replace_all(&mut self, incoming: impl IntoIterator<Item = Todo>) -> usize {
        self.todos.clear();
        self.merge_batch(incoming)
    }

    /// Creates a local todo and returns its identifier.
    pub fn create(&mut self, draft: NewTodo, clock: &impl Clock) -> TodoId {
        self.next_local_id += 1;
        let id = TodoId::Local(self.next_local_id);
        self.todos.push(Todo::created(id, draft.title, draft.user_id, clock));
        id
    }

    /// Removes the todo with `id`. Returns whether a todo was removed.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id() != id);
        self.todos.len() != before
    }

    /// Overwrites title, completion and user of the matching todo and stamps
    /// its update time. Returns whether the todo was found.
    pub fn edit(&mut self, edit: TodoEdit, clock: &impl Clock) -> bool {
        let TodoEdit {
            id,
            title,
            completed,
            user_id,
        } = edit;
        self.find_mut(id).is_some_and(|todo| {
            todo.apply_edit(title, completed, user_id, clock);
            true
        })
    }

    /// Flips completion of the matching todo and stamps its update time.
    /// Returns whether the todo was found.
    pub fn toggle_completed(&mut self, id: TodoId, clock: &impl Clock) -> bool {
        self.find_mut(id).is_some_and(|todo| {
            todo.toggle_completed(clock);
            true
        })
    }

    /// Applies a dispatched command.
    pub fn apply(&mut self, command: TodoCommand, clock: &impl Clock) -> CommandOutcome {
        match command {
            TodoCommand::Merge(todos) => CommandOutcome::Merged(self.merge_batch(todos)),
            TodoCommand::Replace(todos) => CommandOutcome::Replaced(self.replace_all(todos)),
            TodoCommand::Create(draft) => CommandOutcome::Created(self.create(draft, clock)),
            TodoCommand::Delete(id) => CommandOutcome::Applied(self.delete(id)),
            TodoCommand::Edit(edit) => CommandOutcome::Applied(self.edit(edit, clock)),
            TodoCommand::Toggle(id) => CommandOutcome::Applied(self.toggle_completed(id, clock)),
        }
    }

    fn find_mut(&mut self, id: TodoId) -> Option<&mut Todo> {
        self.todos.iter_mut().find(|todo| todo.id() == id)
    }
}
