//! The cart store.

use core::fmt;

use tracing::instrument;

use docushop_core::{CartTotals, LineItem, LineKey, NewLineItem, Quantity, Settings};

use super::{CartObserver, CartSnapshot, ObserverId};
use crate::storage::{Storage, StorageKeys, read_json_or_default, write_json};

/// Owns the persisted cart and the views that display it.
///
/// There is no in-memory copy of the cart: every operation reads storage
/// afresh. Two stores over the same storage (two tabs) do not coordinate;
/// the last full write wins.
pub struct CartStore<S> {
    storage: S,
    keys: StorageKeys,
    observers: Vec<(ObserverId, Box<dyn CartObserver>)>,
    next_observer: u64,
}

impl<S: Storage> CartStore<S> {
    /// Create a store over `storage` using the default slots.
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self::with_keys(storage, StorageKeys::default())
    }

    /// Create a store over `storage` using custom slots.
    #[must_use]
    pub fn with_keys(storage: S, keys: StorageKeys) -> Self {
        Self {
            storage,
            keys,
            observers: Vec::new(),
            next_observer: 0,
        }
    }

    /// The storage slots in use.
    #[must_use]
    pub const fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// The underlying storage.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    // =========================================================================
    // State access
    // =========================================================================

    /// Read the cart. Absent or malformed data reads as an empty cart.
    #[must_use]
    pub fn read(&self) -> Vec<LineItem> {
        read_json_or_default(&self.storage, &self.keys.cart)
    }

    /// Replace the stored cart with `items`.
    ///
    /// A rejected write is logged and otherwise ignored; the next read shows
    /// the previous contents.
    pub fn write(&self, items: &[LineItem]) {
        if let Err(e) = write_json(&self.storage, &self.keys.cart, items) {
            tracing::warn!(error = %e, lines = items.len(), "Failed to persist cart");
        }
    }

    /// Read the settings record. Absent or malformed data reads as defaults.
    #[must_use]
    pub fn settings(&self) -> Settings {
        read_json_or_default(&self.storage, &self.keys.settings)
    }

    /// Totals for the stored cart.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals::compute(&self.read(), &self.settings())
    }

    /// The stored cart together with its totals.
    #[must_use]
    pub fn snapshot(&self) -> CartSnapshot {
        let items = self.read();
        let totals = CartTotals::compute(&items, &self.settings());
        CartSnapshot { items, totals }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a line, or increase the quantity of the line with the same
    /// `(id, variant)`.
    #[instrument(skip(self), fields(id = %item.id))]
    pub fn add_item(&self, item: NewLineItem) {
        self.mutate(|items| {
            let key = item.key();
            if let Some(existing) = items.iter_mut().find(|line| key.matches(line)) {
                existing.qty = existing.qty.saturating_add(item.quantity());
            } else {
                items.push(item.into_line_item());
            }
        });
    }

    /// Delete the line with `key`. Absent lines are a no-op.
    #[instrument(skip(self))]
    pub fn remove_item(&self, key: &LineKey) {
        self.mutate(|items| items.retain(|line| !key.matches(line)));
    }

    /// Set the quantity of the line with `key`, flooring at 1. Absent lines
    /// are a no-op.
    #[instrument(skip(self))]
    pub fn set_qty(&self, key: &LineKey, qty: i64) {
        self.set_quantity(key, Quantity::coerce(qty));
    }

    /// Set the quantity from raw quantity-field text. Fractions are
    /// truncated; non-numeric text counts as 1.
    #[instrument(skip(self))]
    pub fn set_qty_input(&self, key: &LineKey, raw: &str) {
        self.set_quantity(key, Quantity::parse_lenient(raw));
    }

    /// Empty the cart.
    #[instrument(skip(self))]
    pub fn clear_cart(&self) {
        self.mutate(Vec::clear);
    }

    /// Re-sync every view without changing the cart, as on page load.
    pub fn refresh(&self) {
        self.notify();
    }

    fn set_quantity(&self, key: &LineKey, qty: Quantity) {
        self.mutate(|items| {
            if let Some(line) = items.iter_mut().find(|line| key.matches(line)) {
                line.qty = qty;
            }
        });
    }

    fn mutate(&self, apply: impl FnOnce(&mut Vec<LineItem>)) {
        let mut items = self.read();
        apply(&mut items);
        self.write(&items);
        self.notify();
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Register a view. Views are notified in registration order.
    pub fn subscribe(&mut self, observer: impl CartObserver + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Unregister a view. Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() < before
    }

    /// Number of registered views.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&self) {
        if self.observers.is_empty() {
            return;
        }

        let snapshot = self.snapshot();
        tracing::debug!(
            lines = snapshot.items.len(),
            item_count = snapshot.totals.item_count,
            views = self.observers.len(),
            "Syncing cart views"
        );
        for (_, observer) in &self.observers {
            observer.cart_changed(&snapshot);
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for CartStore<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("storage", &self.storage)
            .field("keys", &self.keys)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use docushop_core::Price;

    use super::*;
    use crate::storage::MemoryStorage;

    fn pen() -> NewLineItem {
        NewLineItem::new("pen", "Pen", Price::from_cents(150))
    }

    #[test]
    fn test_add_appends_then_accumulates() {
        let store = CartStore::new(MemoryStorage::new());
        store.add_item(pen().with_qty(2));
        store.add_item(pen().with_qty(3));
        store.add_item(pen().with_variant("blue"));

        let items = store.read();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].qty.get(), 5);
        assert_eq!(items[1].variant.as_str(), "blue");
    }

    #[test]
    fn test_add_keeps_existing_name_and_price() {
        let store = CartStore::new(MemoryStorage::new());
        store.add_item(pen());
        store.add_item(NewLineItem::new("pen", "Renamed", Price::from_cents(999)));

        let items = store.read();
        assert_eq!(items[0].name, "Pen");
        assert_eq!(items[0].price, Price::from_cents(150));
        assert_eq!(items[0].qty.get(), 2);
    }

    #[test]
    fn test_set_qty_floor_and_missing_line() {
        let store = CartStore::new(MemoryStorage::new());
        store.add_item(pen().with_qty(4));
        let key = LineKey::new("pen", "default");

        store.set_qty(&key, 0);
        assert_eq!(store.read()[0].qty.get(), 1);

        store.set_qty(&key, 6);
        store.set_qty(&LineKey::new("ghost", "default"), 9);
        assert_eq!(store.read().len(), 1);
        assert_eq!(store.read()[0].qty.get(), 6);
    }

    #[test]
    fn test_set_qty_input_coerces_text() {
        let store = CartStore::new(MemoryStorage::new());
        store.add_item(pen());
        let key = LineKey::new("pen", "default");

        store.set_qty_input(&key, "3.9");
        assert_eq!(store.read()[0].qty.get(), 3);

        store.set_qty_input(&key, "lots");
        assert_eq!(store.read()[0].qty.get(), 1);
    }

    #[test]
    fn test_observers_notified_in_order_and_unsubscribe() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut store = CartStore::new(MemoryStorage::new());

        let first = Rc::clone(&calls);
        let first_id = store.subscribe(move |s: &CartSnapshot| {
            first.borrow_mut().push(("first", s.totals.item_count));
        });
        let second = Rc::clone(&calls);
        store.subscribe(move |s: &CartSnapshot| {
            second.borrow_mut().push(("second", s.totals.item_count));
        });

        store.add_item(pen());
        assert_eq!(*calls.borrow(), [("first", 1), ("second", 1)]);

        assert!(store.unsubscribe(first_id));
        assert!(!store.unsubscribe(first_id));
        store.clear_cart();
        assert_eq!(calls.borrow().last(), Some(&("second", 0)));
        assert_eq!(calls.borrow().len(), 3);
    }

    #[test]
    fn test_rejected_write_is_not_observed() {
        let store = CartStore::new(MemoryStorage::with_quota(128));
        store.add_item(pen());
        assert_eq!(store.read().len(), 1);

        store.add_item(NewLineItem::new("x".repeat(80), "Big", Price::ZERO));
        let items = store.read();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id.as_str(), "pen");
    }

    #[test]
    fn test_settings_override_shipping() {
        let storage = MemoryStorage::new();
        storage
            .set_item(StorageKeys::DEFAULT_SETTINGS, r#"{"shippingDiscreet":"5"}"#)
            .unwrap();
        let store = CartStore::new(storage);
        store.add_item(pen());

        let totals = store.totals();
        assert_eq!(totals.shipping, Price::from_cents(500));
        assert_eq!(totals.total, Price::from_cents(650));
    }
}
