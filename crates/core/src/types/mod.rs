//! Core types for Docushop.
//!
//! This module provides type-safe wrappers for the cart and catalog domain.

pub mod id;
pub mod line_item;
pub mod price;
pub mod product;
pub mod quantity;
pub mod settings;
pub mod totals;

pub use id::*;
pub use line_item::{LineItem, LineKey, NewLineItem};
pub use price::{Price, PriceError};
pub use product::{CategoryFilter, Product, SortOrder, SortOrderError};
pub use quantity::Quantity;
pub use settings::{DEFAULT_SHIPPING, Settings};
pub use totals::CartTotals;
