//! Unified error handling.
//!
//! Each concern has its own error enum; [`Error`] aggregates them for
//! front ends such as the CLI. The cart store itself never returns these to
//! its callers: storage failures there degrade to defaults.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Product API operation failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Template rendering failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),
}

/// Result type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::from(ConfigError::MissingEnvVar("DOCUSHOP_API_URL".to_string()));
        assert_eq!(
            err.to_string(),
            "Config error: Missing environment variable: DOCUSHOP_API_URL"
        );

        let err = Error::from(CatalogError::Status(503));
        assert_eq!(
            err.to_string(),
            "Catalog error: product API returned status 503"
        );
    }
}
