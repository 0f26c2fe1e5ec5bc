//! Product catalog: remote product API client and listing controls.
//!
//! # Architecture
//!
//! - The product API is the source of truth - no local sync, direct calls
//! - In-memory caching via `moka` for listings (5 minute TTL by default)
//! - Filtering and sorting happen locally over the fetched listing
//!
//! # Example
//!
//! ```rust,ignore
//! use docushop_storefront::catalog::{ProductApiClient, ProductListing};
//!
//! let client = ProductApiClient::new(&config.require_catalog()?);
//! let products = client.fetch_products(Some("stationery")).await?;
//! let listing = ProductListing::new(products).sorted(SortOrder::PriceAsc);
//! ```

mod cache;
mod client;
mod listing;

pub use client::ProductApiClient;
pub use listing::{ProductCardView, ProductGridTemplate, ProductListing};

use thiserror::Error;

/// Errors that can occur when talking to the product API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("product API returned status {0}")]
    Status(u16),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The products URL could not be built.
    #[error("invalid product API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
