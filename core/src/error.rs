//! Error types for validation and storage.
//!
//! # Design
//! Display strings of `ValidationError` are the exact messages returned to
//! API clients. `StoreError` wraps whatever the database reported and keeps
//! its message, since the HTTP layer surfaces it verbatim on most routes.

use thiserror::Error;

/// A rejected todo title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Title absent, empty, or whitespace only.
    #[error("Invalid title")]
    InvalidTitle,

    /// Trimmed title longer than the allowed maximum.
    #[error("Title must be less than 50 characters")]
    TitleTooLong,
}

/// Failures from the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The SQLite driver or pool returned an error.
    #[error("{0}")]
    Database(#[from] sqlx::Error),
}
