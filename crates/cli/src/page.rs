//! Terminal rendering target for cart surfaces.

use docushop_storefront::render::{Document, Selector, SurfaceIds};

/// A [`Document`] that reports every updated surface through tracing.
///
/// Every selector is treated as present, so each surface is written once.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsolePage;

impl ConsolePage {
    /// One surface per concern, so each value is logged once.
    #[must_use]
    pub fn surfaces() -> SurfaceIds {
        SurfaceIds {
            count_ids: vec!["cart-count".to_string()],
            subtotal_ids: vec!["cart-total".to_string()],
            subtotal_classes: Vec::new(),
            total_ids: vec!["checkout-total".to_string()],
            order_items_id: "checkout-order-items".to_string(),
        }
    }
}

impl Document for ConsolePage {
    fn set_text(&self, selector: &Selector, text: &str) -> usize {
        tracing::info!(surface = %selector, "{text}");
        1
    }

    fn set_html(&self, selector: &Selector, html: &str) -> usize {
        tracing::debug!(surface = %selector, bytes = html.len(), "Order listing rendered");
        1
    }
}
