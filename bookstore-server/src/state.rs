//! Application state

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use bookstore_core::{BookRepository, BookService, JsonFileRepository, MemoryRepository};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Catalog service used by the book handlers
    pub books: BookService,
}

impl AppState {
    pub fn new(books: BookService) -> Self {
        Self { books }
    }

    /// Wire the service to the repository selected by configuration
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let repository: Arc<dyn BookRepository> = match &config.catalog_path {
            Some(path) => {
                tracing::info!("Using catalog file {}", path.display());
                let repo = JsonFileRepository::open(path)
                    .with_context(|| format!("Failed to open catalog {}", path.display()))?;
                Arc::new(repo)
            }
            None => {
                tracing::warn!("BOOKSTORE_CATALOG not set, catalog is kept in memory");
                Arc::new(MemoryRepository::new())
            }
        };

        Ok(Self::new(BookService::new(repository)))
    }
}
