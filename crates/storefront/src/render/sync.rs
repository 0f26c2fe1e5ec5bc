//! Cart observers that keep page surfaces in sync.

use askama::Template;

use super::{Document, OrderItemsTemplate, Selector, SurfaceIds};
use crate::cart::{CartObserver, CartSnapshot, CartStore, ObserverId};
use crate::storage::Storage;

/// Writes the item count into every count badge.
#[derive(Debug, Clone)]
pub struct BadgeSync<D> {
    document: D,
    targets: Vec<Selector>,
}

impl<D: Document> BadgeSync<D> {
    /// Sync the count surfaces named in `ids`.
    #[must_use]
    pub fn new(document: D, ids: &SurfaceIds) -> Self {
        Self {
            document,
            targets: ids.count_ids.iter().map(Selector::id).collect(),
        }
    }
}

impl<D: Document> CartObserver for BadgeSync<D> {
    fn cart_changed(&self, snapshot: &CartSnapshot) {
        let count = snapshot.totals.item_count.to_string();
        for target in &self.targets {
            self.document.set_text(target, &count);
        }
    }
}

/// Writes the subtotal and checkout total into every price display.
///
/// Class-based displays are swept last, so an element matched both by a
/// total id and a subtotal class ends up showing the subtotal.
#[derive(Debug, Clone)]
pub struct TotalsSync<D> {
    document: D,
    subtotal_ids: Vec<Selector>,
    total_ids: Vec<Selector>,
    subtotal_classes: Vec<Selector>,
}

impl<D: Document> TotalsSync<D> {
    /// Sync the total surfaces named in `ids`.
    #[must_use]
    pub fn new(document: D, ids: &SurfaceIds) -> Self {
        Self {
            document,
            subtotal_ids: ids.subtotal_ids.iter().map(Selector::id).collect(),
            total_ids: ids.total_ids.iter().map(Selector::id).collect(),
            subtotal_classes: ids.subtotal_classes.iter().map(Selector::class).collect(),
        }
    }
}

impl<D: Document> CartObserver for TotalsSync<D> {
    fn cart_changed(&self, snapshot: &CartSnapshot) {
        let subtotal = snapshot.totals.subtotal.to_string();
        let total = snapshot.totals.total.to_string();

        for target in &self.subtotal_ids {
            self.document.set_text(target, &subtotal);
        }
        for target in &self.total_ids {
            self.document.set_text(target, &total);
        }
        for target in &self.subtotal_classes {
            self.document.set_text(target, &subtotal);
        }
    }
}

/// Rebuilds the checkout order listing.
#[derive(Debug, Clone)]
pub struct LineItemSync<D> {
    document: D,
    target: Selector,
}

impl<D: Document> LineItemSync<D> {
    /// Sync the listing container named in `ids`.
    #[must_use]
    pub fn new(document: D, ids: &SurfaceIds) -> Self {
        Self {
            document,
            target: Selector::id(&ids.order_items_id),
        }
    }
}

impl<D: Document> CartObserver for LineItemSync<D> {
    fn cart_changed(&self, snapshot: &CartSnapshot) {
        match OrderItemsTemplate::from(snapshot).render() {
            Ok(html) => {
                self.document.set_html(&self.target, &html);
            }
            Err(e) => tracing::warn!(error = %e, "Failed to render order listing"),
        }
    }
}

/// Register the badge, totals and listing views on `store`.
pub fn install_default_views<S, D>(
    store: &mut CartStore<S>,
    document: &D,
    ids: &SurfaceIds,
) -> [ObserverId; 3]
where
    S: Storage,
    D: Document + Clone + 'static,
{
    [
        store.subscribe(BadgeSync::new(document.clone(), ids)),
        store.subscribe(TotalsSync::new(document.clone(), ids)),
        store.subscribe(LineItemSync::new(document.clone(), ids)),
    ]
}

#[cfg(test)]
mod tests {
    use docushop_core::{LineKey, NewLineItem, Price};

    use super::*;
    use crate::render::MemoryDocument;
    use crate::storage::MemoryStorage;

    fn checkout_page() -> MemoryDocument {
        let doc = MemoryDocument::new()
            .with_id("cart-count")
            .with_id("checkout-subtotal")
            .with_id("checkout-total")
            .with_id("checkout-order-items");
        doc.add_element(None, &["total-price"]);
        doc
    }

    #[test]
    fn test_default_views_follow_mutations() {
        let doc = checkout_page();
        let mut store = CartStore::new(MemoryStorage::new());
        install_default_views(&mut store, &doc, &SurfaceIds::default());

        store.add_item(NewLineItem::new("a", "A", Price::from_cents(1000)).with_qty(2));
        store.add_item(NewLineItem::new("b", "B", Price::from_cents(500)));

        assert_eq!(doc.text_of("cart-count").as_deref(), Some("3"));
        assert_eq!(doc.text_of("checkout-subtotal").as_deref(), Some("$25.00"));
        assert_eq!(doc.text_of("checkout-total").as_deref(), Some("$55.00"));
        assert_eq!(doc.texts_of_class("total-price"), ["$25.00"]);

        let listing = doc.text_of("checkout-order-items").unwrap_or_default();
        assert_eq!(listing.matches("class=\"order-item\"").count(), 2);

        store.remove_item(&LineKey::new("a", "default"));
        assert_eq!(doc.text_of("cart-count").as_deref(), Some("1"));
    }

    #[test]
    fn test_class_sweep_runs_after_total_ids() {
        let doc = MemoryDocument::new();
        doc.add_element(Some("checkout-total"), &["checkout-total"]);
        let store = CartStore::new(MemoryStorage::new());
        store.add_item(NewLineItem::new("a", "A", Price::from_cents(1000)));

        TotalsSync::new(&doc, &SurfaceIds::default()).cart_changed(&store.snapshot());
        assert_eq!(doc.text_of("checkout-total").as_deref(), Some("$10.00"));
    }

    #[test]
    fn test_views_tolerate_missing_targets() {
        let doc = MemoryDocument::new().with_id("cart-count");
        let mut store = CartStore::new(MemoryStorage::new());
        install_default_views(&mut store, &doc, &SurfaceIds::default());

        store.add_item(NewLineItem::new("a", "A", Price::from_cents(100)));
        store.clear_cart();
        assert_eq!(doc.text_of("cart-count").as_deref(), Some("0"));
    }

    #[test]
    fn test_refresh_syncs_without_mutation() {
        let storage = MemoryStorage::new();
        CartStore::new(storage.clone())
            .add_item(NewLineItem::new("a", "A", Price::from_cents(100)).with_qty(4));

        let doc = checkout_page();
        let mut store = CartStore::new(storage);
        install_default_views(&mut store, &doc, &SurfaceIds::default());
        assert_eq!(doc.text_of("cart-count").as_deref(), Some(""));

        store.refresh();
        assert_eq!(doc.text_of("cart-count").as_deref(), Some("4"));
    }
}
