//! Integration tests for the file-backed cart.
//!
//! A file stands in for the browser's persistent storage, so a cart written
//! by one store instance must be visible to the next.

#![allow(clippy::unwrap_used)]

use docushop_core::{Price, Settings};
use docushop_integration_tests::{item, key};
use docushop_storefront::cart::CartStore;
use docushop_storefront::config::StorefrontConfig;
use docushop_storefront::storage::{FileStorage, Storage, StorageKeys, write_json};

#[test]
fn test_cart_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let store = CartStore::new(FileStorage::new(&path));
        store.add_item(item("notebook", 1250, 2));
        store.add_item(item("pen", 250, 1).with_variant("blue"));
    }

    let store = CartStore::new(FileStorage::new(&path));
    let items = store.read();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].qty.get(), 2);
    assert_eq!(items[1].variant.as_str(), "blue");
    assert_eq!(store.totals().subtotal, Price::from_cents(2750));
}

#[test]
fn test_missing_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = CartStore::new(FileStorage::new(dir.path().join("nested/none.json")));

    assert!(store.read().is_empty());
    assert_eq!(store.totals().total, Price::from_cents(3000));
}

#[test]
fn test_corrupted_file_reads_empty_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "this is not json").unwrap();

    let store = CartStore::new(FileStorage::new(&path));
    assert!(store.read().is_empty());

    store.add_item(item("pen", 250, 1));
    assert_eq!(store.read().len(), 1);
}

#[test]
fn test_cart_and_settings_share_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("storage.json"));
    let store = CartStore::new(storage.clone());

    write_json(
        &storage,
        StorageKeys::DEFAULT_SETTINGS,
        &Settings::with_shipping(Price::from_cents(999)),
    )
    .unwrap();
    store.add_item(item("pen", 100, 1));
    store.set_qty(&key("pen"), 3);

    assert!(storage.get_item(StorageKeys::DEFAULT_SETTINGS).is_some());
    assert_eq!(store.totals().total, Price::from_cents(1299));
}

#[test]
fn test_store_from_config_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("custom.json");
    let file_str = file.to_string_lossy().into_owned();

    let config = StorefrontConfig::from_lookup(|name| match name {
        "DOCUSHOP_STORAGE_FILE" => Some(file_str.clone()),
        "DOCUSHOP_CART_KEY" => Some("basket".to_string()),
        _ => None,
    })
    .unwrap();

    let storage = FileStorage::new(config.storage_file.clone());
    let store = CartStore::with_keys(storage.clone(), config.keys.clone());
    store.add_item(item("pen", 100, 1));

    assert!(storage.get_item("basket").is_some());
    assert!(storage.get_item(StorageKeys::DEFAULT_CART).is_none());
    assert!(file.exists());
}
