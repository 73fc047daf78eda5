//! Core types for the bookstore catalog

mod book;
mod health;

pub use book::{Book, NewBook};
pub use health::{HealthStatus, API_URL, SERVICE_NAME, STATUS_HEALTHY};
