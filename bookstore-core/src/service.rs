//! Book lookup service and the catalog operations around it

use crate::error::{BookstoreError, Result};
use crate::storage::BookRepository;
use crate::types::{Book, NewBook};
use std::sync::Arc;

/// Catalog service wired explicitly to its repository
#[derive(Clone)]
pub struct BookService {
    repository: Arc<dyn BookRepository>,
}

impl BookService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Look up a book, failing with `BookNotFound` carrying `id` when absent
    pub fn get_book_by_id(&self, id: i64) -> Result<Book> {
        self.repository
            .find_by_id(id)?
            .ok_or(BookstoreError::BookNotFound(id))
    }

    /// All books ordered by identifier
    pub fn list_books(&self) -> Result<Vec<Book>> {
        Ok(self.repository.find_all()?)
    }

    pub fn create_book(&self, book: NewBook) -> Result<Book> {
        book.validate()?;
        Ok(self.repository.insert(book)?)
    }

    pub fn update_book(&self, id: i64, book: NewBook) -> Result<Book> {
        book.validate()?;
        self.repository
            .update(id, book)?
            .ok_or(BookstoreError::BookNotFound(id))
    }

    pub fn delete_book(&self, id: i64) -> Result<()> {
        if self.repository.delete(id)? {
            Ok(())
        } else {
            Err(BookstoreError::BookNotFound(id))
        }
    }
}
