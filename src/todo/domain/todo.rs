//! Todo entity and its timestamp rules.

use super::{TodoId, TodoTitle, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A single todo item owned by the store.
///
/// Decoding goes through [`TodoParts`], so a decoded `updatedAt` earlier
/// than `createdAt` is raised to `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "TodoParts")]
pub struct Todo {
    id: TodoId,
    user_id: UserId,
    title: String,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a todo from known field values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoParts {
    /// Todo identifier.
    pub id: TodoId,
    /// Owning user.
    pub user_id: UserId,
    /// Display title.
    pub title: String,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp, if the todo was ever mutated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<TodoParts> for Todo {
    fn from(parts: TodoParts) -> Self {
        Self::from_parts(parts)
    }
}

impl Todo {
    /// Creates a todo imported from the remote source.
    ///
    /// The title is kept verbatim and the todo always starts incomplete,
    /// whatever the source reported.
    #[must_use]
    pub fn imported(
        id: TodoId,
        user_id: UserId,
        title: impl Into<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            completed: false,
            created_at: clock.utc(),
            updated_at: None,
        }
    }

    /// Creates a locally authored todo with a store-assigned identifier.
    pub(super) fn created(
        id: TodoId,
        title: TodoTitle,
        user_id: UserId,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            user_id,
            title: title.into_inner(),
            completed: false,
            created_at: clock.utc(),
            updated_at: None,
        }
    }

    /// Reconstructs a todo from explicit field values.
    ///
    /// An `updated_at` earlier than `created_at` is raised to `created_at`.
    #[must_use]
    pub fn from_parts(parts: TodoParts) -> Self {
        let updated_at = parts.updated_at.map(|stamp| stamp.max(parts.created_at));
        Self {
            id: parts.id,
            user_id: parts.user_id,
            title: parts.title,
            completed: parts.completed,
            created_at: parts.created_at,
            updated_at,
        }
    }

    /// Returns the todo identifier.
    #[must_use]
    pub const fn id(&self) -> TodoId {
        self.id
    }

    /// Returns the owning user.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the todo is completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp, or `None` before the first
    /// edit or toggle.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Returns `true` when an "updated" annotation should be shown.
    #[must_use]
    pub fn was_updated(&self) -> bool {
        self.updated_at.is_some_and(|stamp| stamp != self.created_at)
    }

    /// Flips the completion flag.
    pub(super) fn toggle_completed(&mut self, clock: &impl Clock) {
        self.completed = !self.completed;
        self.touch(clock);
    }

    /// Overwrites the user-editable fields.
    pub(super) fn apply_edit(
        &mut self,
        title: TodoTitle,
        completed: bool,
        user_id: UserId,
        clock: &impl Clock,
    ) {
        self.title = title.into_inner();
        self.completed = completed;
        self.user_id = user_id;
        self.touch(clock);
    }

    /// Stamps `updated_at`, never earlier than `created_at`.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = Some(clock.utc().max(self.created_at));
    }
}
