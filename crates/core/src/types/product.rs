//! Catalog products and listing controls.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{NewLineItem, Price, ProductId, slugify};

/// A product as returned by the product API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier (`_id` or `id` on the wire).
    #[serde(alias = "_id")]
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category label.
    #[serde(default)]
    pub category: Option<String>,
    /// Current unit price.
    pub price: Price,
    /// Price before discount.
    #[serde(default)]
    pub original_price: Option<Price>,
    /// Discount percentage.
    #[serde(default)]
    pub discount: Option<u32>,
    /// Average rating.
    #[serde(default)]
    pub rating: Option<f64>,
    /// Number of reviews.
    #[serde(default)]
    pub reviews: Option<u32>,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// One-line review blurb.
    #[serde(default)]
    pub quick_review: Option<String>,
}

impl From<&Product> for NewLineItem {
    fn from(product: &Product) -> Self {
        Self::new(product.id.clone(), product.name.clone(), product.price)
    }
}

/// Category filter for a product listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every product.
    #[default]
    All,
    /// Show products whose category slug contains this slug.
    Named(String),
}

impl CategoryFilter {
    /// Build a filter from a category label; `"all"` and blank mean everything.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Named(slugify(label))
        }
    }

    /// Returns `true` if `product` passes the filter.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Named(slug) => product
                .category
                .as_deref()
                .is_some_and(|category| slugify(category).contains(slug.as_str())),
        }
    }
}

/// Errors that can occur when parsing a [`SortOrder`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort order: {0}")]
pub struct SortOrderError(String);

/// Ordering applied to a product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Keep the API order.
    #[default]
    Featured,
    /// Newest first: the API order reversed.
    Latest,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
}

impl SortOrder {
    /// Reorder `products` in place. Price sorts are stable.
    pub fn apply(self, products: &mut [Product]) {
        match self {
            Self::Featured => {}
            Self::Latest => products.reverse(),
            Self::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
            Self::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        }
    }

    /// The form value for this order.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Latest => "latest",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = SortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "featured" => Ok(Self::Featured),
            "latest" => Ok(Self::Latest),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            other => Err(SortOrderError(other.to_owned())),
        }
    }
}
