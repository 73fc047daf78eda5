//! List command implementation

use anyhow::Result;
use bookstore_core::BookService;

/// Print every book in the catalog
pub fn list(service: &BookService, json: bool) -> Result<()> {
    let books = service.list_books()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    if books.is_empty() {
        println!("No books in catalog");
        return Ok(());
    }

    for book in &books {
        match book.published_year {
            Some(year) => println!("{:>5}  {} - {} ({})", book.id, book.title, book.author, year),
            None => println!("{:>5}  {} - {}", book.id, book.title, book.author),
        }
    }
    println!("{} book(s)", books.len());

    Ok(())
}
