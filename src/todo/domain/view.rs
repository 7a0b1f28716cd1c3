//! Read-only projections of the store for display.

use super::{ParseViewOptionError, Todo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Completion filter applied to the visible list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoFilter {
    /// Every todo.
    #[default]
    All,
    /// Todos that are not completed.
    Active,
    /// Completed todos.
    Done,
}

impl TodoFilter {
    /// Every filter, in display order.
    pub const VARIANTS: [Self; 3] = [Self::All, Self::Active, Self::Done];

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Done => "Done",
        }
    }

    /// Returns `true` when `todo` passes this filter.
    #[must_use]
    pub const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::Active => !todo.is_completed(),
            Self::Done => todo.is_completed(),
        }
    }
}

impl TryFrom<&str> for TodoFilter {
    type Error = ParseViewOptionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "done" => Ok(Self::Done),
            _ => Err(ParseViewOptionError(value.to_owned())),
        }
    }
}

/// Ordering applied to the visible list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TodoSort {
    /// Ascending by id.
    #[default]
    ById,
    /// Newest `created_at` first.
    ByRecency,
}

impl TodoSort {
    /// Returns the display label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ById => "id",
            Self::ByRecency => "recent",
        }
    }

    /// Returns the other sort key.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::ById => Self::ByRecency,
            Self::ByRecency => Self::ById,
        }
    }
}

impl TryFrom<&str> for TodoSort {
    type Error = ParseViewOptionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "id" | "by_id" => Ok(Self::ById),
            "recent" | "by_recency" => Ok(Self::ByRecency),
            _ => Err(ParseViewOptionError(value.to_owned())),
        }
    }
}

/// Filters and orders `todos` without touching the input.
///
/// Todos with equal sort keys keep their relative input order.
#[must_use]
pub fn project(todos: &[Todo], filter: TodoFilter, sort: TodoSort) -> Vec<&Todo> {
    let mut visible: Vec<&Todo> = todos.iter().filter(|todo| filter.matches(todo)).collect();
    match sort {
        TodoSort::ById => visible.sort_by_key(|todo| todo.id()),
        TodoSort::ByRecency => visible.sort_by_key(|todo| Reverse(todo.created_at())),
    }
    visible
}

/// Completed and total counts for the summary header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoSummary {
    /// Number of completed todos.
    pub completed: usize,
    /// Number of todos.
    pub total: usize,
}

impl TodoSummary {
    /// Counts completed and total todos.
    #[must_use]
    pub fn of(todos: &[Todo]) -> Self {
        Self {
            completed: todos.iter().filter(|todo| todo.is_completed()).count(),
            total: todos.len(),
        }
    }

    /// Number of todos not yet completed.
    #[must_use]
    pub const fn active(self) -> usize {
        self.total.saturating_sub(self.completed)
    }
}

/// Formats a timestamp for the "Created" and "Updated" labels,
/// e.g. `Oct 18, 2026, 09:30 AM`.
#[must_use]
pub fn format_timestamp(stamp: DateTime<Utc>) -> String {
    stamp.format("%b %-d, %Y, %I:%M %p").to_string()
}
