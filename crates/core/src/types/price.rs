//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are non-negative amounts in a single implicit currency, held in
//! whole cents and capped at [`Price::MAX`]. They are persisted as plain JSON
//! numbers so a stored cart line reads `{"price": 12.5}` and renders as
//! `$12.50`. Every valid price survives that trip through `f64` unchanged.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Quantity;

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
    /// The amount is above [`Price::MAX`].
    #[error("price too large: {0}")]
    TooLarge(Decimal),
    /// The input is not a number.
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// A non-negative unit or aggregate price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// The largest price, `999999999999.99`.
    ///
    /// Fourteen significant digits stay exact through an `f64`.
    pub const MAX: Self = Self(Decimal::from_parts(276_447_231, 23_283, 0, false, 2));

    /// Create a new price, rounded to cents half away from zero.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero and
    /// [`PriceError::TooLarge`] if it rounds above [`Price::MAX`].
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        if cents > Self::MAX.0 {
            return Err(PriceError::TooLarge(amount));
        }
        Ok(Self(cents.normalize()))
    }

    /// Wrap an amount already known to be non-negative.
    pub(crate) const fn from_decimal_unchecked(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in cents.
    #[must_use]
    pub fn from_cents(cents: u32) -> Self {
        Self(Decimal::new(i64::from(cents), 2))
    }

    /// Create a price from a floating point amount.
    ///
    /// # Errors
    ///
    /// Returns an error for NaN, infinities and negative amounts.
    pub fn from_f64(amount: f64) -> Result<Self, PriceError> {
        let decimal =
            Decimal::from_f64(amount).ok_or_else(|| PriceError::Invalid(amount.to_string()))?;
        Self::new(decimal)
    }

    /// Parse a price out of rendered text such as `"$1,250.00"`.
    ///
    /// Every character other than ASCII digits and `.` is dropped before
    /// parsing. Text that still does not parse yields [`Price::ZERO`].
    #[must_use]
    pub fn parse_display(text: &str) -> Self {
        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        Decimal::from_str(&cleaned)
            .ok()
            .and_then(|amount| Self::new(amount).ok())
            .unwrap_or(Self::ZERO)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `qty` units, saturating at [`Price::MAX`].
    #[must_use]
    pub fn times(self, qty: Quantity) -> Self {
        Self::saturating(self.0.checked_mul(Decimal::from(qty.get())))
    }

    fn saturating(amount: Option<Decimal>) -> Self {
        match amount {
            Some(amount) if amount <= Self::MAX.0 => Self(amount),
            _ => Self::MAX,
        }
    }

    /// Amount rounded to cents, half away from zero.
    #[must_use]
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.rounded())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim()).map_err(|_| PriceError::Invalid(s.to_owned()))?;
        Self::new(amount)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::saturating(self.0.checked_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0.to_f64().unwrap_or_default())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(amount) => Self::from_f64(amount),
            Raw::Text(text) => text.parse(),
        }
        .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        assert!(matches!(
            Price::new(Decimal::new(-1, 0)),
            Err(PriceError::Negative(_))
        ));
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Price::from_cents(1999).to_string(), "$19.99");
        assert_eq!(Price::from_f64(25.0).unwrap().to_string(), "$25.00");
        assert_eq!(Price::from_f64(0.125).unwrap().to_string(), "$0.13");
    }

    #[test]
    fn test_parse_display_strips_symbols() {
        assert_eq!(Price::parse_display("$1,250.00"), Price::from_cents(125_000));
        assert_eq!(Price::parse_display("Price: 15"), Price::from_cents(1500));
        assert_eq!(Price::parse_display("free"), Price::ZERO);
        assert_eq!(Price::parse_display("1.2.3"), Price::ZERO);
    }

    #[test]
    fn test_times_and_sum() {
        let unit = Price::from_cents(1000);
        let line = unit.times(Quantity::coerce(2));
        assert_eq!(line, Price::from_cents(2000));

        let total: Price = [line, Price::from_cents(500)].into_iter().sum();
        assert_eq!(total, Price::from_cents(2500));
    }

    #[test]
    fn test_new_rounds_to_cents() {
        let price: Price = "0.1234567890123456789".parse().unwrap();
        assert_eq!(price, Price::from_cents(12));
        assert!(matches!(
            Price::new(Decimal::new(-1, 3)),
            Err(PriceError::Negative(_))
        ));
    }

    #[test]
    fn test_new_rejects_above_max() {
        assert_eq!("999999999999.99".parse::<Price>().unwrap(), Price::MAX);
        assert!(matches!(
            "79228162514264337593543950335".parse::<Price>(),
            Err(PriceError::TooLarge(_))
        ));
        assert!(matches!(
            "999999999999.995".parse::<Price>(),
            Err(PriceError::TooLarge(_))
        ));
    }

    #[test]
    fn test_arithmetic_saturates_at_max() {
        assert_eq!(Price::MAX.times(Quantity::coerce(2)), Price::MAX);
        assert_eq!(Price::MAX + Price::from_cents(1), Price::MAX);
    }

    #[test]
    fn test_max_survives_json() {
        let json = serde_json::to_string(&Price::MAX).unwrap();
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Price::MAX);

        let cents = Price::from_cents(u32::MAX);
        let back: Price = serde_json::from_str(&serde_json::to_string(&cents).unwrap()).unwrap();
        assert_eq!(back, cents);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Price::from_cents(1250)).unwrap();
        assert_eq!(json, "12.5");
    }

    #[test]
    fn test_deserializes_number_or_string() {
        let from_number: Price = serde_json::from_str("10").unwrap();
        let from_text: Price = serde_json::from_str("\"10.00\"").unwrap();
        assert_eq!(from_number, from_text);

        assert!(serde_json::from_str::<Price>("-3").is_err());
        assert!(serde_json::from_str::<Price>("\"ten\"").is_err());
    }
}
