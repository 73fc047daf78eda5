//! Catalog records

use crate::error::{BookstoreError, Result};
use serde::{Deserialize, Serialize};

/// A stored catalog record
///
/// The `id` is assigned by the repository on insert and never changes afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub published_year: Option<i32>,
}

/// Payload for creating or replacing a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub published_year: Option<i32>,
}

impl NewBook {
    /// Create a payload without a publication year
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            published_year: None,
        }
    }

    /// Set the publication year
    pub fn with_year(mut self, year: i32) -> Self {
        self.published_year = Some(year);
        self
    }

    /// Reject blank titles and authors
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(BookstoreError::Validation("title must not be blank".to_string()));
        }
        if self.author.trim().is_empty() {
            return Err(BookstoreError::Validation("author must not be blank".to_string()));
        }
        Ok(())
    }

    /// Attach an identifier, producing a stored record
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            published_year: self.published_year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_book_keeps_fields() {
        let book = NewBook::new("Dune", "Frank Herbert").with_year(1965).into_book(7);
        assert_eq!(book.id, 7);
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.published_year, Some(1965));
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        assert!(NewBook::new("  ", "Someone").validate().is_err());
        assert!(NewBook::new("Title", "").validate().is_err());
        assert!(NewBook::new("Title", "Someone").validate().is_ok());
    }

    #[test]
    fn test_published_year_optional_in_json() {
        let payload: NewBook =
            serde_json::from_str(r#"{"title":"Emma","author":"Jane Austen"}"#).unwrap();
        assert_eq!(payload.published_year, None);

        let book = payload.into_book(1);
        let json = serde_json::to_value(&book).unwrap();
        assert!(json["published_year"].is_null());
    }
}
