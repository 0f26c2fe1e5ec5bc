//! Product API client implementation.
//!
//! Uses `reqwest` for HTTP and caches listings per category using `moka`.

use std::sync::Arc;

use moka::future::Cache;
use tracing::{debug, instrument};
use url::Url;

use docushop_core::Product;

use super::CatalogError;
use super::cache::CacheKey;
use crate::config::CatalogConfig;

/// Client for the remote product API.
///
/// Cheap to clone; clones share the HTTP connection pool and the cache.
#[derive(Clone)]
pub struct ProductApiClient {
    inner: Arc<ProductApiClientInner>,
}

struct ProductApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    cache: Cache<CacheKey, Vec<Product>>,
}

impl ProductApiClient {
    /// Create a new product API client.
    #[must_use]
    pub fn new(config: &CatalogConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(100)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            inner: Arc::new(ProductApiClientInner {
                client: reqwest::Client::new(),
                base_url: config.api_url.clone(),
                cache,
            }),
        }
    }

    /// The URL listing products, optionally narrowed to `category`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidUrl` if the base URL cannot carry a path.
    pub fn products_url(&self, category: Option<&str>) -> Result<Url, CatalogError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .push("products");

        if let Some(category) = category {
            url.query_pairs_mut().append_pair("category", category);
        }
        Ok(url)
    }

    /// Fetch products, optionally narrowed to `category`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API answers with a
    /// non-success status, or the body is not a JSON array of products.
    #[instrument(skip(self))]
    pub async fn fetch_products(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<Product>, CatalogError> {
        let key = CacheKey::for_category(category);
        if let Some(products) = self.inner.cache.get(&key).await {
            debug!(count = products.len(), "Product listing served from cache");
            return Ok(products);
        }

        let url = self.products_url(category)?;
        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Product API returned non-success status"
            );
            return Err(CatalogError::Status(status.as_u16()));
        }

        let products: Vec<Product> = serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse product API response"
            );
            CatalogError::Parse(e)
        })?;

        debug!(count = products.len(), "Fetched product listing");
        self.inner.cache.insert(key, products.clone()).await;
        Ok(products)
    }

    /// Drop every cached listing.
    pub fn invalidate_cache(&self) {
        self.inner.cache.invalidate_all();
    }
}

impl std::fmt::Debug for ProductApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductApiClient")
            .field("base_url", &self.inner.base_url.as_str())
            .field("cached_listings", &self.inner.cache.entry_count())
            .finish()
    }
}
