//! Derived cart totals.

use serde::Serialize;

use crate::{LineItem, Price, Settings};

/// Totals derived from the line items and settings.
///
/// Never stored; recomputed from scratch whenever the cart is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// Sum of quantities over all lines.
    pub item_count: u64,
    /// Sum of `price * qty` over all lines.
    pub subtotal: Price,
    /// Shipping fee from settings, or the default.
    pub shipping: Price,
    /// `subtotal + shipping`.
    pub total: Price,
}

impl CartTotals {
    /// Compute totals for `items` under `settings`.
    #[must_use]
    pub fn compute(items: &[LineItem], settings: &Settings) -> Self {
        let item_count = items.iter().map(|item| u64::from(item.qty)).sum();
        let subtotal: Price = items.iter().map(LineItem::line_total).sum();
        let shipping = settings.shipping_fee();

        Self {
            item_count,
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}
