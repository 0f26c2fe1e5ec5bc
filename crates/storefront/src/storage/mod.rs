//! Key/value storage backing the cart.
//!
//! The [`Storage`] trait mirrors the browser's Web Storage API: string keys,
//! string values, synchronous calls. Every handle to the same backend sees
//! the same data, so two handles behave like two tabs of one origin.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - shared in-process map, optionally with a quota
//! - [`FileStorage`] - a JSON object file on disk

mod file;
mod memory;

use std::rc::Rc;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors that can occur when writing to storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be encoded or the backing file could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The write would exceed the storage quota.
    #[error("storage quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded {
        /// Bytes the backend would hold after the write.
        needed: usize,
        /// Maximum bytes the backend accepts.
        quota: usize,
    },
}

/// Synchronous string key/value storage.
pub trait Storage {
    /// Get the value stored under `key`.
    fn get_item(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Missing keys are ignored.
    fn remove_item(&self, key: &str);
}

impl<T: Storage + ?Sized> Storage for &T {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key);
    }
}

impl<T: Storage + ?Sized> Storage for Arc<T> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key);
    }
}

impl<T: Storage + ?Sized> Storage for Rc<T> {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) {
        (**self).remove_item(key);
    }
}

/// Storage slots used by the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    /// Slot holding the serialized cart.
    pub cart: String,
    /// Slot holding the settings record.
    pub settings: String,
}

impl StorageKeys {
    /// Default cart slot.
    pub const DEFAULT_CART: &'static str = "docushop_cart_items";
    /// Default settings slot.
    pub const DEFAULT_SETTINGS: &'static str = "docushop_settings";
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            cart: Self::DEFAULT_CART.to_string(),
            settings: Self::DEFAULT_SETTINGS.to_string(),
        }
    }
}

/// Read and decode a JSON value, collapsing absent or malformed data to the
/// type's default.
pub fn read_json_or_default<T, S>(storage: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: Storage + ?Sized,
{
    let Some(raw) = storage.get_item(key) else {
        return T::default();
    };

    serde_json::from_str(&raw).unwrap_or_else(|e| {
        tracing::debug!(key, error = %e, "Discarding malformed stored value");
        T::default()
    })
}

/// Encode a value as JSON and store it.
///
/// # Errors
///
/// Returns an error if encoding fails or the backend rejects the write.
pub fn write_json<T, S>(storage: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: Storage + ?Sized,
{
    let encoded = serde_json::to_string(value)?;
    storage.set_item(key, &encoded)
}
