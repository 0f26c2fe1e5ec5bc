//! Cart commands.
//!
//! Every mutation goes through the cart store, so the console views report
//! the new count and totals afterwards.

use docushop_core::{LineKey, NewLineItem, Price};
use docushop_storefront::config::StorefrontConfig;
use docushop_storefront::render::CartTableTemplate;

use super::{Result, open_store, print_html};

/// Show the cart contents, or print the cart table as HTML.
///
/// # Errors
///
/// Returns an error if the HTML table fails to render or stdout is closed.
pub fn show(config: &StorefrontConfig, html: bool, checkout_url: &str) -> Result<()> {
    let store = open_store(config);
    let snapshot = store.snapshot();

    if html {
        return print_html(&CartTableTemplate::new(&snapshot, checkout_url));
    }

    if snapshot.is_empty() {
        tracing::info!("Cart is empty");
    }
    for item in &snapshot.items {
        match item.variant.label() {
            Some(label) => tracing::info!(
                id = %item.id,
                variant = label,
                qty = item.qty.get(),
                "{} @ {} = {}",
                item.name,
                item.price,
                item.line_total()
            ),
            None => tracing::info!(
                id = %item.id,
                qty = item.qty.get(),
                "{} @ {} = {}",
                item.name,
                item.price,
                item.line_total()
            ),
        }
    }
    tracing::info!(
        items = snapshot.totals.item_count,
        subtotal = %snapshot.totals.subtotal,
        shipping = %snapshot.totals.shipping,
        total = %snapshot.totals.total,
        "Cart totals"
    );
    Ok(())
}

/// Add `qty` of a product to the cart.
pub fn add(
    config: &StorefrontConfig,
    id: String,
    name: String,
    price: Price,
    variant: String,
    qty: Option<i64>,
) {
    let store = open_store(config);
    let mut item = NewLineItem::new(id, name, price).with_variant(variant);
    if let Some(qty) = qty {
        item = item.with_qty(qty);
    }
    tracing::info!(id = %item.id, qty = item.quantity().get(), "Adding to cart");
    store.add_item(item);
}

/// Remove a line from the cart.
pub fn remove(config: &StorefrontConfig, id: String, variant: String) {
    let store = open_store(config);
    let key = LineKey::new(id, variant);
    if !store.read().iter().any(|item| key.matches(item)) {
        tracing::warn!(id = %key.id, variant = %key.variant, "No such line in cart");
    }
    store.remove_item(&key);
}

/// Set the quantity of a line from raw user input.
pub fn set_qty(config: &StorefrontConfig, id: String, variant: String, raw: &str) {
    let store = open_store(config);
    let key = LineKey::new(id, variant);
    store.set_qty_input(&key, raw);
}

/// Empty the cart.
pub fn clear(config: &StorefrontConfig) {
    let store = open_store(config);
    store.clear_cart();
    tracing::info!("Cart cleared");
}
