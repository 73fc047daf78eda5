//! Show command implementation

use super::print_book;
use anyhow::Result;
use bookstore_core::BookService;

/// Display a single book, failing when the id is unknown
pub fn show(service: &BookService, id: i64, json: bool) -> Result<()> {
    let book = service.get_book_by_id(id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&book)?);
    } else {
        print_book(&book);
    }

    Ok(())
}
