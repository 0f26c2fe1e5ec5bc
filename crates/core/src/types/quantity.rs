//! Line item quantities.
//!
//! A [`Quantity`] is always at least 1. Every way of building one coerces
//! invalid input (zero, negative, fractional, non-numeric) to the nearest
//! valid value instead of rejecting it.

use core::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A positive line item quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    /// The smallest valid quantity.
    pub const ONE: Self = Self(1);

    /// Coerce an integer to a quantity, flooring at 1.
    #[must_use]
    pub fn coerce(value: i64) -> Self {
        if value < 1 {
            Self::ONE
        } else {
            Self(u32::try_from(value).unwrap_or(u32::MAX))
        }
    }

    /// Coerce a float to a quantity, truncating toward zero first.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::ONE;
        }
        // `as` saturates at the i64 bounds.
        Self::coerce(value.trunc() as i64)
    }

    /// Coerce raw text from a quantity field.
    ///
    /// Non-numeric text becomes 1.
    #[must_use]
    pub fn parse_lenient(text: &str) -> Self {
        text.trim()
            .parse::<f64>()
            .map_or(Self::ONE, Self::from_f64)
    }

    /// The quantity as an integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Add two quantities, saturating at `u32::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Quantity> for u64 {
    fn from(qty: Quantity) -> Self {
        Self::from(qty.0)
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Stored quantities are coerced, never rejected.
        let value = f64::deserialize(deserializer)?;
        Ok(Self::from_f64(value))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_floors_at_one() {
        assert_eq!(Quantity::coerce(0).get(), 1);
        assert_eq!(Quantity::coerce(-5).get(), 1);
        assert_eq!(Quantity::coerce(7).get(), 7);
        assert_eq!(Quantity::coerce(i64::MAX).get(), u32::MAX);
    }

    #[test]
    fn test_from_f64_truncates() {
        assert_eq!(Quantity::from_f64(2.9).get(), 2);
        assert_eq!(Quantity::from_f64(0.5).get(), 1);
        assert_eq!(Quantity::from_f64(-3.7).get(), 1);
        assert_eq!(Quantity::from_f64(f64::NAN).get(), 1);
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(Quantity::parse_lenient("4").get(), 4);
        assert_eq!(Quantity::parse_lenient(" 3.5 ").get(), 3);
        assert_eq!(Quantity::parse_lenient("many").get(), 1);
        assert_eq!(Quantity::parse_lenient("").get(), 1);
    }

    #[test]
    fn test_deserialize_coerces() {
        let qty: Quantity = serde_json::from_str("0").unwrap();
        assert_eq!(qty, Quantity::ONE);

        let qty: Quantity = serde_json::from_str("2.0").unwrap();
        assert_eq!(qty.get(), 2);
    }

    #[test]
    fn test_saturating_add() {
        let big = Quantity::coerce(i64::from(u32::MAX));
        assert_eq!(big.saturating_add(Quantity::ONE).get(), u32::MAX);
    }
}
