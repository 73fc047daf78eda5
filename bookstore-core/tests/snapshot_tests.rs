//! Snapshot tests for bookstore-core using insta
//!
//! These pin the JSON wire shape of catalog records.

use bookstore_core::{Book, NewBook};

fn sample_book() -> Book {
    NewBook::new("The Left Hand of Darkness", "Ursula K. Le Guin")
        .with_year(1969)
        .into_book(1)
}

#[test]
fn test_book_json_snapshot() {
    insta::assert_json_snapshot!(sample_book(), @r###"
    {
      "id": 1,
      "title": "The Left Hand of Darkness",
      "author": "Ursula K. Le Guin",
      "published_year": 1969
    }
    "###);
}

#[test]
fn test_book_without_year_snapshot() {
    let book = NewBook::new("Beowulf", "Unknown").into_book(2);
    insta::assert_json_snapshot!(book, @r###"
    {
      "id": 2,
      "title": "Beowulf",
      "author": "Unknown",
      "published_year": null
    }
    "###);
}
