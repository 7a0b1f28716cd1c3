//! Hand-off contract for the create/edit entry surface.

use crate::todo::domain::{Todo, TodoId};
use serde::{Deserialize, Serialize};

/// Parameters passed to the editor: no id means create, an id means edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorRequest {
    /// Todo being edited, if any.
    pub id: Option<TodoId>,
    /// Title used to pre-fill the input.
    pub title: Option<String>,
}

/// Mode derived from an [`EditorRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// A new todo will be created.
    Create,
    /// The given todo will be edited.
    Edit(TodoId),
}

/// Result of submitting the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    /// A todo was created with this id.
    Created(TodoId),
    /// The todo was edited.
    Edited(TodoId),
    /// The todo to edit no longer exists; nothing changed.
    Missing(TodoId),
}

impl EditorRequest {
    /// Opens the editor in create mode.
    #[must_use]
    pub const fn create() -> Self {
        Self {
            id: None,
            title: None,
        }
    }

    /// Opens the editor for `todo`, pre-filled with its title.
    #[must_use]
    pub fn edit(todo: &Todo) -> Self {
        Self {
            id: Some(todo.id()),
            title: Some(todo.title().to_owned()),
        }
    }

    /// Returns the editor mode.
    #[must_use]
    pub const fn mode(&self) -> EditorMode {
        match self.id {
            Some(id) => EditorMode::Edit(id),
            None => EditorMode::Create,
        }
    }

    /// Returns the text the input starts with.
    #[must_use]
    pub fn initial_title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }
}
