//! Error types for Bookstore Core

use thiserror::Error;

/// Result type alias using BookstoreError
pub type Result<T> = std::result::Result<T, BookstoreError>;

/// Top-level error type for all catalog operations
#[derive(Debug, Error)]
pub enum BookstoreError {
    /// No record exists for the requested identifier
    #[error("Book not found with id: {0}")]
    BookNotFound(i64),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors that occur inside a repository backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend error: {0}")]
    Backend(String),
}
