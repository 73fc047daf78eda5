//! HTTP translation of catalog errors

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bookstore_core::BookstoreError;
use serde::Serialize;
use thiserror::Error;

/// Error returned by request handlers
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Bookstore(#[from] BookstoreError),

    /// The request could not be extracted (bad path parameter or body)
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            ApiError::Bookstore(BookstoreError::BookNotFound(_)) => {
                (StatusCode::NOT_FOUND, "not_found", self.to_string())
            }
            ApiError::Bookstore(BookstoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone())
            }
            ApiError::Bookstore(BookstoreError::Storage(e)) => {
                tracing::error!("Storage error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
            ApiError::Rejected { status, message } => {
                tracing::debug!("Rejected request: {}", message);
                (*status, "bad_request", message.clone())
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error, message })).into_response()
    }
}
