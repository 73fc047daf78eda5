//! Book catalog handlers

use crate::error::ApiError;
use crate::extractors::{ApiJson, ApiPath};
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use bookstore_core::{Book, BookService, NewBook};

/// Run a service call on the blocking pool
/// The file-backed repository does synchronous disk I/O
async fn run_blocking<T, F>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&BookService) -> bookstore_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let service = state.books.clone();
    tokio::task::spawn_blocking(move || f(&service))
        .await
        .map_err(|e| ApiError::Internal(format!("Task failed: {}", e)))?
        .map_err(ApiError::from)
}

/// List all books
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = run_blocking(&state, |service| service.list_books()).await?;
    Ok(Json(books))
}

/// Get a single book
pub async fn get_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Book>, ApiError> {
    let book = run_blocking(&state, move |service| service.get_book_by_id(id)).await?;
    Ok(Json(book))
}

pub async fn create_book(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewBook>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let book = run_blocking(&state, move |service| service.create_book(payload)).await?;
    tracing::info!(id = book.id, title = %book.title, "Book created");
    Ok((StatusCode::CREATED, Json(book)))
}

pub async fn update_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<NewBook>,
) -> Result<Json<Book>, ApiError> {
    let book = run_blocking(&state, move |service| service.update_book(id, payload)).await?;
    tracing::info!(id, "Book updated");
    Ok(Json(book))
}

pub async fn delete_book(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, ApiError> {
    run_blocking(&state, move |service| service.delete_book(id)).await?;
    tracing::info!(id, "Book deleted");
    Ok(StatusCode::NO_CONTENT)
}
