//! Bookstore Core Library
//!
//! This crate provides the catalog types, the repository abstraction and the
//! book service used by the Bookstore server and CLI. The service is wired to a
//! repository explicitly; lookups of unknown identifiers surface as
//! [`BookstoreError::BookNotFound`].

pub mod error;
pub mod service;
pub mod storage;
pub mod types;

pub use error::{BookstoreError, Result, StorageError};
pub use service::BookService;
pub use storage::{BookRepository, JsonFileRepository, MemoryRepository};
pub use types::{Book, HealthStatus, NewBook};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_service_creation() {
        let service = BookService::new(Arc::new(MemoryRepository::new()));
        let book = service
            .create_book(NewBook::new("Test Book", "Test Author"))
            .unwrap();
        assert_eq!(book.id, 1);
        assert_eq!(service.get_book_by_id(1).unwrap().title, "Test Book");
    }
}
