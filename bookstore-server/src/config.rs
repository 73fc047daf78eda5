//! Server configuration from environment variables

use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid BOOKSTORE_PORT: {0}")]
    InvalidPort(String),
}

/// Allowed CORS origins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<String>),
}

impl Default for CorsOrigins {
    /// Local development origins
    fn default() -> Self {
        CorsOrigins::List(vec![
            "http://localhost:3000".to_string(),
            "http://localhost:5173".to_string(),
            "http://127.0.0.1:3000".to_string(),
            "http://127.0.0.1:5173".to_string(),
        ])
    }
}

impl CorsOrigins {
    /// Parse `*` or a comma-separated origin list
    pub fn parse(value: &str) -> Self {
        if value.trim() == "*" {
            return CorsOrigins::Any;
        }
        CorsOrigins::List(
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// JSON catalog file; `None` keeps the catalog in memory
    pub catalog_path: Option<PathBuf>,
    pub cors_origins: CorsOrigins,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            catalog_path: None,
            cors_origins: CorsOrigins::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("BOOKSTORE_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        Ok(ServerConfig {
            host: lookup("BOOKSTORE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            catalog_path: lookup("BOOKSTORE_CATALOG")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            cors_origins: lookup("BOOKSTORE_CORS_ORIGINS")
                .map(|v| CorsOrigins::parse(&v))
                .unwrap_or_default(),
        })
    }
}
