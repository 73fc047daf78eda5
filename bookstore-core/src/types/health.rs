//! Liveness payload

use serde::{Deserialize, Serialize};

/// Value of the `status` field
pub const STATUS_HEALTHY: &str = "healthy";

/// Value of the `service` field
pub const SERVICE_NAME: &str = "Bookstore API";

/// Value of the `apiURL` field
pub const API_URL: &str = "http://localhost:5000/api/v1/books";

/// Fixed-shape health response, built fresh for every request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    /// RFC 3339 UTC instant of the call
    pub timestamp: String,
    pub service: String,
    #[serde(rename = "apiURL")]
    pub api_url: String,
}

impl HealthStatus {
    /// Build the payload stamped with the current time
    pub fn now() -> Self {
        Self {
            status: STATUS_HEALTHY.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            service: SERVICE_NAME.to_string(),
            api_url: API_URL.to_string(),
        }
    }
}
