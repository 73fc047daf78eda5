//! Add and update command implementations

use super::print_book;
use anyhow::{Context, Result};
use bookstore_core::{BookService, NewBook};

/// Add a book and report its assigned id
pub fn add(service: &BookService, book: NewBook) -> Result<()> {
    let book = service
        .create_book(book)
        .context("Failed to add book")?;

    tracing::info!("Added '{}' as id {}", book.title, book.id);
    println!("{}", book.id);

    Ok(())
}

/// Replace an existing book's details
pub fn update(service: &BookService, id: i64, book: NewBook) -> Result<()> {
    let book = service
        .update_book(id, book)
        .with_context(|| format!("Failed to update book {}", id))?;

    print_book(&book);

    Ok(())
}
