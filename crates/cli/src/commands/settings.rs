//! Settings commands.
//!
//! Settings belong to the page, so unknown fields in the stored record are
//! preserved when the shipping override changes.

use docushop_core::{Price, Settings};
use docushop_storefront::config::StorefrontConfig;
use docushop_storefront::storage::{FileStorage, read_json_or_default, write_json};
use serde_json::{Map, Value};

use super::{Result, open_store};

const SHIPPING_FIELD: &str = "shippingDiscreet";

/// Show the effective shipping fee.
pub fn show(config: &StorefrontConfig) {
    let storage = FileStorage::new(config.storage_file.clone());
    let settings: Settings = read_json_or_default(&storage, &config.keys.settings);
    match &settings.shipping_discreet {
        Some(raw) => tracing::info!(stored = %raw, fee = %settings.shipping_fee(), "Shipping override"),
        None => tracing::info!(fee = %settings.shipping_fee(), "Default shipping"),
    }
}

/// Set the shipping override, or remove it when `amount` is `None`.
///
/// # Errors
///
/// Returns an error if the settings record cannot be written.
pub fn shipping(config: &StorefrontConfig, amount: Option<Price>) -> Result<()> {
    let store = open_store(config);
    let key = &store.keys().settings;

    let mut record: Map<String, Value> = read_json_or_default(store.storage(), key);
    match amount {
        Some(fee) => {
            let encoded = Settings::with_shipping(fee).shipping_discreet.unwrap_or_default();
            record.insert(SHIPPING_FIELD.to_string(), encoded);
            tracing::info!(fee = %fee, "Shipping override set");
        }
        None => {
            record.remove(SHIPPING_FIELD);
            tracing::info!("Shipping override cleared");
        }
    }
    write_json(store.storage(), key, &record)
        .map_err(docushop_storefront::Error::from)?;

    // Totals depend on the fee; redraw them
    store.refresh();
    Ok(())
}
