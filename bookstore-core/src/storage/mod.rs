//! Repository abstraction for the book catalog

mod json_file;

pub use json_file::JsonFileRepository;

use crate::error::StorageError;
use crate::types::{Book, NewBook};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Result type for repository operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Abstract book repository
/// Implementations must be internally consistent under concurrent use
pub trait BookRepository: Send + Sync {
    /// Look up a single book by identifier
    fn find_by_id(&self, id: i64) -> StorageResult<Option<Book>>;

    /// All books ordered by ascending identifier
    fn find_all(&self) -> StorageResult<Vec<Book>>;

    /// Store a new book under a freshly assigned identifier
    fn insert(&self, book: NewBook) -> StorageResult<Book>;

    /// Replace the fields of an existing book, keeping its identifier
    /// Returns `None` when no book has that identifier
    fn update(&self, id: i64, book: NewBook) -> StorageResult<Option<Book>>;

    /// Remove a book, returning whether it existed
    fn delete(&self, id: i64) -> StorageResult<bool>;
}

/// Catalog contents shared by the repository backends
///
/// `next_id` only ever grows, so identifiers of deleted books are never handed out again.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    pub next_id: i64,
    pub books: BTreeMap<i64, Book>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            next_id: 1,
            books: BTreeMap::new(),
        }
    }
}

impl Catalog {
    /// Check that every key matches its record's id and that `next_id` lies past all of them
    /// A stale `next_id` is moved forward rather than rejected
    fn verified(mut self) -> StorageResult<Self> {
        if let Some((key, book)) = self.books.iter().find(|(key, book)| **key != book.id) {
            return Err(StorageError::Backend(format!(
                "catalog entry {} holds book with id {}",
                key, book.id
            )));
        }
        self.next_id = self.next_id.max(first_free_id(&self.books));
        Ok(self)
    }

    fn get(&self, id: i64) -> Option<Book> {
        self.books.get(&id).cloned()
    }

    fn all(&self) -> Vec<Book> {
        self.books.values().cloned().collect()
    }

    fn insert(&mut self, book: NewBook) -> StorageResult<Book> {
        let id = self.next_id;
        let next_id = id.checked_add(1).ok_or_else(ids_exhausted)?;
        if self.books.contains_key(&id) {
            return Err(ids_exhausted());
        }
        self.next_id = next_id;
        let book = book.into_book(id);
        self.books.insert(id, book.clone());
        Ok(book)
    }

    fn update(&mut self, id: i64, book: NewBook) -> Option<Book> {
        let slot = self.books.get_mut(&id)?;
        *slot = book.into_book(id);
        Some(slot.clone())
    }

    fn remove(&mut self, id: i64) -> bool {
        self.books.remove(&id).is_some()
    }
}

/// Identifier following the highest stored one, saturating at `i64::MAX`
fn first_free_id(books: &BTreeMap<i64, Book>) -> i64 {
    books
        .keys()
        .next_back()
        .map_or(1, |max| max.saturating_add(1))
}

fn ids_exhausted() -> StorageError {
    StorageError::Backend("book identifiers exhausted".to_string())
}

fn poisoned() -> StorageError {
    StorageError::Backend("catalog lock poisoned".to_string())
}

/// In-memory repository (for testing and ephemeral runs)
#[derive(Default)]
pub struct MemoryRepository {
    catalog: RwLock<Catalog>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing records
    /// `next_id` continues after the highest seeded identifier
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let books: BTreeMap<i64, Book> = books.into_iter().map(|b| (b.id, b)).collect();
        let next_id = first_free_id(&books);
        Self {
            catalog: RwLock::new(Catalog { next_id, books }),
        }
    }
}

impl BookRepository for MemoryRepository {
    fn find_by_id(&self, id: i64) -> StorageResult<Option<Book>> {
        Ok(self.catalog.read().map_err(|_| poisoned())?.get(id))
    }

    fn find_all(&self) -> StorageResult<Vec<Book>> {
        Ok(self.catalog.read().map_err(|_| poisoned())?.all())
    }

    fn insert(&self, book: NewBook) -> StorageResult<Book> {
        self.catalog.write().map_err(|_| poisoned())?.insert(book)
    }

    fn update(&self, id: i64, book: NewBook) -> StorageResult<Option<Book>> {
        Ok(self.catalog.write().map_err(|_| poisoned())?.update(id, book))
    }

    fn delete(&self, id: i64) -> StorageResult<bool> {
        Ok(self.catalog.write().map_err(|_| poisoned())?.remove(id))
    }
}
