//! Error types for catalog integration

use thiserror::Error;

/// Errors that can occur when fetching the product catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog service answered with a non-success status
    #[error("Catalog service returned status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// Response body did not match the expected product shape
    #[error("Malformed catalog response: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// Check if retrying the fetch can plausibly succeed
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CatalogError::Request(_) | CatalogError::Status { .. })
    }
}
