//! Client-held shopping cart.
//!
//! The cart lives in a single storage slot as a JSON array of line items.
//! [`CartStore`] is the only writer: each mutation reads the slot, applies
//! one change, writes the whole array back, and then re-syncs every
//! registered [`CartObserver`] from a fresh read.
//!
//! # Example
//!
//! ```rust
//! use docushop_core::{LineKey, NewLineItem, Price};
//! use docushop_storefront::cart::CartStore;
//! use docushop_storefront::storage::MemoryStorage;
//!
//! let mut store = CartStore::new(MemoryStorage::new());
//! store.subscribe(|snapshot: &docushop_storefront::cart::CartSnapshot| {
//!     assert!(snapshot.totals.item_count > 0);
//! });
//!
//! store.add_item(NewLineItem::new("pen", "Pen", Price::from_cents(150)).with_qty(2));
//! assert_eq!(store.totals().subtotal, Price::from_cents(300));
//! ```

mod observer;
mod store;

pub use observer::{CartObserver, CartSnapshot, ObserverId};
pub use store::CartStore;
