//! HTTP client for the catalog service

use reqwest::Client;

use super::error::CatalogError;
use super::models::Product;

/// Catalog service client
#[derive(Debug, Clone)]
pub struct CatalogClient {
    /// HTTP client
    client: Client,
}

impl CatalogClient {
    /// Catalog service base URL
    const BASE_URL: &'static str = "https://fakestoreapi.com/products";
    /// Request timeout
    const TIMEOUT: std::time::Duration = std::time::Duration::from_secs(30);

    /// Create a new catalog client
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Fetch the product list, optionally capped by a count parameter
    pub async fn fetch_products(&self, limit: Option<u32>) -> Result<Vec<Product>, CatalogError> {
        let mut request = self.client.get(Self::BASE_URL);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status { status: status.as_u16() });
        }

        let body = response.text().await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;
        Ok(products)
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_is_cheaply_cloneable() {
        let client = CatalogClient::new();
        let _background_copy = client.clone();
    }
}
