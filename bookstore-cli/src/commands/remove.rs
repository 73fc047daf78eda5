//! Remove command implementation

use anyhow::{Context, Result};
use bookstore_core::BookService;

pub fn remove(service: &BookService, id: i64) -> Result<()> {
    service
        .delete_book(id)
        .with_context(|| format!("Failed to remove book {}", id))?;

    println!("Removed book {}", id);

    Ok(())
}
