//! Error types for the storage layer.

use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database connection or query error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Event not found.
    #[error("event not found: {0}")]
    EventNotFound(i64),

    /// Note not found.
    #[error("note not found: {0}")]
    NoteNotFound(i64),

    /// Schema creation error.
    #[error("schema error: {0}")]
    Schema(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Whether this error represents a missing resource.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::EventNotFound(_) | Self::NoteNotFound(_))
    }
}
