//! Cart line items.

use serde::{Deserialize, Serialize};

use crate::{Price, ProductId, Quantity, VariantKey};

/// The identity pair of a line item.
///
/// No two lines in a cart share the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    /// Product identifier.
    pub id: ProductId,
    /// Variant discriminator.
    pub variant: VariantKey,
}

impl LineKey {
    /// Create a key from an id and variant.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, variant: impl Into<VariantKey>) -> Self {
        Self {
            id: id.into(),
            variant: variant.into(),
        }
    }

    /// Returns `true` if `item` has this identity.
    #[must_use]
    pub fn matches(&self, item: &LineItem) -> bool {
        item.id == self.id && item.variant == self.variant
    }
}

/// One row in the cart, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier.
    pub id: ProductId,
    /// Variant discriminator (`"default"` when the product has none).
    #[serde(default)]
    pub variant: VariantKey,
    /// Display label.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Quantity, at least 1.
    #[serde(default)]
    pub qty: Quantity,
}

impl LineItem {
    /// The identity pair of this line.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            id: self.id.clone(),
            variant: self.variant.clone(),
        }
    }

    /// `price * qty`.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.qty)
    }
}

/// Input to an add-to-cart operation.
///
/// A missing variant means the default variant; a missing, zero or negative
/// quantity means 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLineItem {
    /// Product identifier.
    pub id: ProductId,
    /// Variant discriminator.
    pub variant: Option<VariantKey>,
    /// Display label.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Requested quantity.
    pub qty: Option<i64>,
}

impl NewLineItem {
    /// Create an input for one unit of the default variant.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Price) -> Self {
        Self {
            id: id.into(),
            variant: None,
            name: name.into(),
            price,
            qty: None,
        }
    }

    /// Set the variant.
    #[must_use]
    pub fn with_variant(mut self, variant: impl Into<VariantKey>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Set the requested quantity.
    #[must_use]
    pub const fn with_qty(mut self, qty: i64) -> Self {
        self.qty = Some(qty);
        self
    }

    /// The quantity this input adds, after coercion.
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.qty.map_or(Quantity::ONE, Quantity::coerce)
    }

    /// The identity pair this input targets.
    #[must_use]
    pub fn key(&self) -> LineKey {
        LineKey {
            id: self.id.clone(),
            variant: self.variant.clone().unwrap_or_default(),
        }
    }

    /// Turn the input into a stored line.
    #[must_use]
    pub fn into_line_item(self) -> LineItem {
        let qty = self.quantity();
        LineItem {
            id: self.id,
            variant: self.variant.unwrap_or_default(),
            name: self.name,
            price: self.price,
            qty,
        }
    }
}
