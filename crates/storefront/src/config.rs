//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `DOCUSHOP_STORAGE_FILE` - Storage file for the cart (default: `.docushop/storage.json`)
//! - `DOCUSHOP_CART_KEY` - Storage slot holding the cart (default: `docushop_cart_items`)
//! - `DOCUSHOP_SETTINGS_KEY` - Storage slot holding settings (default: `docushop_settings`)
//! - `DOCUSHOP_API_URL` - Product API base URL; catalog features need it
//! - `DOCUSHOP_CATALOG_CACHE_SECS` - Product listing cache TTL (default: 300)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::storage::StorageKeys;

const DEFAULT_STORAGE_FILE: &str = ".docushop/storage.json";
const DEFAULT_CACHE_SECS: u64 = 300;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// File backing the cart and settings slots
    pub storage_file: PathBuf,
    /// Storage slot names
    pub keys: StorageKeys,
    /// Product API configuration, when `DOCUSHOP_API_URL` is set
    pub catalog: Option<CatalogConfig>,
}

/// Product API configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL; products are fetched from `{api_url}/products`
    pub api_url: Url,
    /// How long fetched listings are cached
    pub cache_ttl: Duration,
}

impl CatalogConfig {
    /// Configuration for `api_url` with the default cache TTL.
    #[must_use]
    pub const fn new(api_url: Url) -> Self {
        Self {
            api_url,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_SECS),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_file = PathBuf::from(
            lookup("DOCUSHOP_STORAGE_FILE").unwrap_or_else(|| DEFAULT_STORAGE_FILE.to_string()),
        );

        let keys = StorageKeys {
            cart: non_empty(&lookup, "DOCUSHOP_CART_KEY")?
                .unwrap_or_else(|| StorageKeys::DEFAULT_CART.to_string()),
            settings: non_empty(&lookup, "DOCUSHOP_SETTINGS_KEY")?
                .unwrap_or_else(|| StorageKeys::DEFAULT_SETTINGS.to_string()),
        };

        let catalog = match lookup("DOCUSHOP_API_URL") {
            Some(raw) => {
                let api_url = Url::parse(&raw).map_err(|e| {
                    ConfigError::InvalidEnvVar("DOCUSHOP_API_URL".to_string(), e.to_string())
                })?;
                let cache_secs = match lookup("DOCUSHOP_CATALOG_CACHE_SECS") {
                    Some(raw) => raw.parse::<u64>().map_err(|e| {
                        ConfigError::InvalidEnvVar(
                            "DOCUSHOP_CATALOG_CACHE_SECS".to_string(),
                            e.to_string(),
                        )
                    })?,
                    None => DEFAULT_CACHE_SECS,
                };
                Some(CatalogConfig {
                    api_url,
                    cache_ttl: Duration::from_secs(cache_secs),
                })
            }
            None => None,
        };

        Ok(Self {
            storage_file,
            keys,
            catalog,
        })
    }

    /// The catalog configuration, or an error naming the missing variable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `DOCUSHOP_API_URL` is unset.
    pub fn require_catalog(&self) -> Result<&CatalogConfig, ConfigError> {
        self.catalog
            .as_ref()
            .ok_or_else(|| ConfigError::MissingEnvVar("DOCUSHOP_API_URL".to_string()))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable, rejecting blank values.
fn non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<String>, ConfigError> {
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must not be blank".to_string(),
        )),
        other => Ok(other),
    }
}
