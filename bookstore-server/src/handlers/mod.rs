//! Request handlers

mod books;

pub use books::*;

use axum::Json;
use bookstore_core::HealthStatus;

/// Health check endpoint, shared by `/`, `/health` and `/api/v1`
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus::now())
}
