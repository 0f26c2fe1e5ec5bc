//! Integration tests for Docushop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p docushop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_store` - Cart operations over shared storage
//! - `file_storage` - Persistence across store instances
//! - `render_fanout` - View updates after each mutation
//! - `catalog_client` - Product API client against a local mock server
//!
//! The helpers below build the line items most tests share.

use docushop_core::{LineKey, NewLineItem, Price};

/// A line item for `id` at `cents`, with a quantity.
#[must_use]
pub fn item(id: &str, cents: u32, qty: i64) -> NewLineItem {
    NewLineItem::new(id, id.to_uppercase(), Price::from_cents(cents)).with_qty(qty)
}

/// The key of the default variant of `id`.
#[must_use]
pub fn key(id: &str) -> LineKey {
    LineKey::new(id, docushop_core::VariantKey::default_variant())
}
