//! Concrete element identifiers for cart surfaces.

/// Where each cart surface lives on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceIds {
    /// Elements showing the item count (header badge, item totals).
    pub count_ids: Vec<String>,
    /// Elements showing the subtotal by id (header, sidebar, checkout).
    pub subtotal_ids: Vec<String>,
    /// Classes of generic price-total displays, which show the subtotal.
    pub subtotal_classes: Vec<String>,
    /// Elements showing the checkout total including shipping.
    pub total_ids: Vec<String>,
    /// Container of the checkout order listing.
    pub order_items_id: String,
}

impl Default for SurfaceIds {
    fn default() -> Self {
        Self {
            count_ids: strings(&["cart-count", "total-items"]),
            subtotal_ids: strings(&["cart-total", "cart-total-display", "checkout-subtotal"]),
            subtotal_classes: strings(&["total-price", "cart-total", "checkout-total"]),
            total_ids: strings(&["checkout-total"]),
            order_items_id: "checkout-order-items".to_string(),
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
