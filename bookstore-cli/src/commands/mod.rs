//! CLI command implementations

mod edit;
mod list;
mod remove;
mod show;

pub use edit::{add, update};
pub use list::list;
pub use remove::remove;
pub use show::show;

use anyhow::{Context, Result};
use bookstore_core::{Book, BookService, JsonFileRepository};
use std::path::Path;
use std::sync::Arc;

/// Open the catalog file and wire a service to it
pub fn open_catalog(path: &Path) -> Result<BookService> {
    let repo = JsonFileRepository::open(path)
        .with_context(|| format!("Failed to open catalog: {}", path.display()))?;
    tracing::debug!("Opened catalog {}", path.display());
    Ok(BookService::new(Arc::new(repo)))
}

/// Human-readable block for a single book
fn print_book(book: &Book) {
    println!("Id:          {}", book.id);
    println!("Title:       {}", book.title);
    println!("Author:      {}", book.author);
    if let Some(year) = book.published_year {
        println!("Published:   {}", year);
    }
}
