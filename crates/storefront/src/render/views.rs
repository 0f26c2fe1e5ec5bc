//! Template views for cart listings.

use askama::Template;

use docushop_core::LineItem;

use crate::cart::CartSnapshot;

/// Line item display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemView {
    pub id: String,
    pub name: String,
    pub variant: String,
    pub variant_label: Option<String>,
    pub qty: u32,
    pub unit_price: String,
    pub line_total: String,
}

impl LineItemView {
    /// Whether a variant label should be shown.
    #[must_use]
    pub const fn has_variant(&self) -> bool {
        self.variant_label.is_some()
    }

    /// The variant label, or an empty string.
    #[must_use]
    pub fn variant_label_text(&self) -> &str {
        self.variant_label.as_deref().unwrap_or_default()
    }
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            variant: item.variant.to_string(),
            variant_label: item.variant.label().map(str::to_owned),
            qty: item.qty.get(),
            unit_price: item.price.to_string(),
            line_total: item.line_total().to_string(),
        }
    }
}

/// Checkout order listing (one row per line, or an empty placeholder).
#[derive(Template)]
#[template(path = "partials/order_items.html")]
pub struct OrderItemsTemplate {
    pub rows: Vec<LineItemView>,
}

impl From<&CartSnapshot> for OrderItemsTemplate {
    fn from(snapshot: &CartSnapshot) -> Self {
        Self {
            rows: snapshot.items.iter().map(LineItemView::from).collect(),
        }
    }
}

/// Full cart table with quantity inputs, remove buttons and a summary.
#[derive(Template)]
#[template(path = "cart/table.html")]
pub struct CartTableTemplate {
    pub rows: Vec<LineItemView>,
    pub subtotal: String,
    pub shipping: String,
    pub total: String,
    pub checkout_url: String,
}

impl CartTableTemplate {
    /// Build the table for `snapshot`, linking the checkout button to
    /// `checkout_url`.
    #[must_use]
    pub fn new(snapshot: &CartSnapshot, checkout_url: impl Into<String>) -> Self {
        Self {
            rows: snapshot.items.iter().map(LineItemView::from).collect(),
            subtotal: snapshot.totals.subtotal.to_string(),
            shipping: snapshot.totals.shipping.to_string(),
            total: snapshot.totals.total.to_string(),
            checkout_url: checkout_url.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use docushop_core::{CartTotals, NewLineItem, Price, Settings};

    use super::*;

    fn snapshot(items: Vec<LineItem>) -> CartSnapshot {
        let totals = CartTotals::compute(&items, &Settings::default());
        CartSnapshot { items, totals }
    }

    #[test]
    fn test_view_hides_default_variant() {
        let item = NewLineItem::new("pen", "Pen", Price::from_cents(150))
            .with_qty(2)
            .into_line_item();
        let view = LineItemView::from(&item);
        assert!(!view.has_variant());
        assert_eq!(view.line_total, "$3.00");
        assert_eq!(view.unit_price, "$1.50");
    }

    #[test]
    fn test_order_items_empty_placeholder() {
        let html = OrderItemsTemplate::from(&snapshot(vec![])).render().unwrap();
        assert!(html.contains("No items in cart"));
        assert!(html.contains("$0.00"));
    }

    #[test]
    fn test_order_items_rows() {
        let items = vec![
            NewLineItem::new("map", "Map", Price::from_cents(1000))
                .with_variant("Canada")
                .with_qty(2)
                .into_line_item(),
            NewLineItem::new("pen", "Pen", Price::from_cents(150)).into_line_item(),
        ];
        let html = OrderItemsTemplate::from(&snapshot(items)).render().unwrap();

        assert_eq!(html.matches("class=\"order-item\"").count(), 2);
        assert!(html.contains("Quantity: 2 (Canada)"));
        assert!(html.contains("Quantity: 1<"));
        assert!(html.contains("$20.00"));
        assert!(!html.contains("No items in cart"));
    }

    #[test]
    fn test_order_items_escapes_names() {
        let items = vec![
            NewLineItem::new("x", "<script>alert(1)</script>", Price::ZERO).into_line_item(),
        ];
        let html = OrderItemsTemplate::from(&snapshot(items)).render().unwrap();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_cart_table_summary() {
        let items = vec![
            NewLineItem::new("pen", "Pen", Price::from_cents(500))
                .with_qty(3)
                .into_line_item(),
        ];
        let html = CartTableTemplate::new(&snapshot(items), "/checkout")
            .render()
            .unwrap();

        assert!(html.contains("class=\"qty-input\""));
        assert!(html.contains("data-id=\"pen\""));
        assert!(html.contains("$15.00"));
        assert!(html.contains("$45.00"));
        assert!(html.contains("checkout\">Proceed to Checkout"));
    }
}
