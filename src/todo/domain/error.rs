//! Error types for todo domain validation.

use thiserror::Error;

/// Errors returned while validating todo input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TodoDomainError {
    /// The title is empty after trimming.
    #[error("todo title must not be empty")]
    EmptyTitle,
}

/// Error returned while parsing a filter or sort selection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown view option: {0}")]
pub struct ParseViewOptionError(pub String);
