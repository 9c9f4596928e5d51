//! Product catalog integration
//!
//! Read-only client for the remote catalog service. The rest of the
//! app consumes products as opaque records to lay out; fetch failures
//! surface as a retryable error state, never as a crash.

pub mod client;
pub mod error;
pub mod models;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use models::{Product, Rating};
