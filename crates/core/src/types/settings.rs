//! Storefront settings read by the cart.
//!
//! Settings are owned by the page; the cart only reads the shipping
//! override from them.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::Price;

/// Shipping fee applied when no valid override is configured.
pub const DEFAULT_SHIPPING: Price =
    Price::from_decimal_unchecked(Decimal::from_parts(3000, 0, 0, false, 2));

/// Persisted settings record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Shipping fee override, as stored (number or numeric text).
    #[serde(
        rename = "shippingDiscreet",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub shipping_discreet: Option<serde_json::Value>,
}

impl Settings {
    /// Settings with a shipping override.
    #[must_use]
    pub fn with_shipping(fee: Price) -> Self {
        Self {
            shipping_discreet: Some(serde_json::Value::from(fee.amount().to_string())),
        }
    }

    /// The shipping fee to charge.
    ///
    /// A non-negative number, or text that parses as one, overrides the
    /// default. Anything else falls back to [`DEFAULT_SHIPPING`].
    #[must_use]
    pub fn shipping_fee(&self) -> Price {
        self.shipping_discreet
            .as_ref()
            .and_then(parse_fee)
            .unwrap_or(DEFAULT_SHIPPING)
    }
}

fn parse_fee(value: &serde_json::Value) -> Option<Price> {
    let amount = match value {
        serde_json::Value::Number(n) => n.as_f64().and_then(Decimal::from_f64)?,
        serde_json::Value::String(s) => Decimal::from_str(s.trim()).ok()?,
        _ => return None,
    };
    Price::new(amount).ok()
}
