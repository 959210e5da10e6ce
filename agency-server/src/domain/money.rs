//! Money amounts and discounts.
//!
//! Amounts are stored as integer minor units (cents) so that discount
//! arithmetic is exact. On the wire they are plain JSON numbers with at most
//! two decimal places.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Largest amount accepted from the wire, in cents. Keeps the value exactly
/// representable as an `f64`.
const MAX_CENTS: u64 = 1 << 53;

/// Tolerance when checking that a wire number has at most two decimals.
const CENT_EPSILON: f64 = 1e-6;

/// Error returned when parsing an invalid amount or percentage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid amount: {reason}")]
pub struct InvalidAmount {
    reason: &'static str,
}

impl InvalidAmount {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Convert a wire number to hundredths, rejecting anything finer.
fn to_hundredths(value: f64) -> Result<u64, InvalidAmount> {
    if !value.is_finite() {
        return Err(InvalidAmount::new("must be a finite number"));
    }
    if value < 0.0 {
        return Err(InvalidAmount::new("must not be negative"));
    }
    let scaled = value * 100.0;
    let rounded = scaled.round();
    if (scaled - rounded).abs() > CENT_EPSILON {
        return Err(InvalidAmount::new("more than two decimal places"));
    }
    if rounded > MAX_CENTS as f64 {
        return Err(InvalidAmount::new("too large"));
    }
    Ok(rounded as u64)
}

/// A non-negative money amount.
///
/// # Examples
///
/// ```
/// use agency_server::domain::{Amount, DiscountPercent};
///
/// let base = Amount::from_f64(1000.0).unwrap();
/// let ten = DiscountPercent::from_f64(10.0).unwrap();
/// assert_eq!(base.discounted(ten), Amount::from_f64(900.0).unwrap());
///
/// // Sub-cent precision is rejected
/// assert!(Amount::from_f64(1.005).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(u64);

impl Amount {
    pub const ZERO: Amount = Amount(0);

    /// Create an amount from minor units.
    pub fn from_cents(cents: u64) -> Self {
        Amount(cents)
    }

    /// Create an amount from whole currency units.
    pub fn from_units(units: u64) -> Option<Self> {
        units.checked_mul(100).map(Amount)
    }

    /// Parse a wire number.
    pub fn from_f64(value: f64) -> Result<Self, InvalidAmount> {
        to_hundredths(value).map(Amount)
    }

    /// The amount in minor units.
    pub fn cents(&self) -> u64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn checked_add(self, other: Amount) -> Option<Amount> {
        self.0.checked_add(other.0).map(Amount)
    }

    pub fn checked_mul(self, factor: u64) -> Option<Amount> {
        self.0.checked_mul(factor).map(Amount)
    }

    /// Apply a percentage discount, rounding half-up to the cent.
    pub fn discounted(self, discount: DiscountPercent) -> Amount {
        let remaining = u128::from(10_000 - discount.basis_points());
        let cents = (u128::from(self.0) * remaining + 5_000) / 10_000;
        // Never larger than the input, so it fits.
        Amount(cents as u64)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_u64(self.0 / 100)
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Amount::from_f64(value).map_err(serde::de::Error::custom)
    }
}

/// A discount between 0% and 100%, with at most two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DiscountPercent(u16);

impl DiscountPercent {
    pub const NONE: DiscountPercent = DiscountPercent(0);

    /// Parse a wire number in percent (e.g. `12.5`).
    pub fn from_f64(value: f64) -> Result<Self, InvalidAmount> {
        let hundredths = to_hundredths(value)?;
        if hundredths > 10_000 {
            return Err(InvalidAmount::new("discount must not exceed 100%"));
        }
        Ok(DiscountPercent(hundredths as u16))
    }

    /// The discount in hundredths of a percent.
    pub fn basis_points(&self) -> u16 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            write!(f, "{}%", self.as_f64())
        }
    }
}

impl Serialize for DiscountPercent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0 % 100 == 0 {
            serializer.serialize_u64(u64::from(self.0 / 100))
        } else {
            serializer.serialize_f64(self.as_f64())
        }
    }
}

impl<'de> Deserialize<'de> for DiscountPercent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        DiscountPercent::from_f64(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(v: f64) -> Amount {
        Amount::from_f64(v).unwrap()
    }

    fn pct(v: f64) -> DiscountPercent {
        DiscountPercent::from_f64(v).unwrap()
    }

    #[test]
    fn parse_valid_amounts() {
        assert_eq!(amount(0.0), Amount::ZERO);
        assert_eq!(amount(1000.0).cents(), 100_000);
        assert_eq!(amount(19.99).cents(), 1_999);
        assert_eq!(amount(0.1).cents(), 10);
    }

    #[test]
    fn reject_invalid_amounts() {
        assert!(Amount::from_f64(-1.0).is_err());
        assert!(Amount::from_f64(f64::NAN).is_err());
        assert!(Amount::from_f64(f64::INFINITY).is_err());
        assert!(Amount::from_f64(0.001).is_err());
        assert!(Amount::from_f64(1e300).is_err());
    }

    #[test]
    fn discount_examples() {
        assert_eq!(amount(1000.0).discounted(pct(10.0)), amount(900.0));
        assert_eq!(amount(1000.0).discounted(pct(0.0)), amount(1000.0));
        assert_eq!(amount(1000.0).discounted(pct(100.0)), Amount::ZERO);
        assert_eq!(amount(99.99).discounted(pct(12.5)), amount(87.49));
    }

    #[test]
    fn discount_rounds_half_up() {
        // 0.05 * 0.5 = 0.025, rounds to 0.03
        assert_eq!(amount(0.05).discounted(pct(50.0)).cents(), 3);
    }

    #[test]
    fn reject_discount_over_100() {
        assert!(DiscountPercent::from_f64(100.01).is_err());
        assert!(DiscountPercent::from_f64(-5.0).is_err());
    }

    #[test]
    fn display() {
        assert_eq!(amount(1234.5).to_string(), "1234.50");
        assert_eq!(amount(7.0).to_string(), "7.00");
        assert_eq!(pct(10.0).to_string(), "10%");
        assert_eq!(pct(12.5).to_string(), "12.5%");
    }

    #[test]
    fn serde_numbers() {
        assert_eq!(serde_json::to_string(&amount(900.0)).unwrap(), "900");
        assert_eq!(serde_json::to_string(&amount(87.49)).unwrap(), "87.49");
        assert_eq!(serde_json::to_string(&pct(10.0)).unwrap(), "10");

        let back: Amount = serde_json::from_str("87.49").unwrap();
        assert_eq!(back, amount(87.49));
        assert!(serde_json::from_str::<Amount>("-3").is_err());
    }

    #[test]
    fn checked_arithmetic() {
        assert_eq!(amount(10.0).checked_add(amount(2.5)), Some(amount(12.5)));
        assert_eq!(amount(10.0).checked_mul(3), Some(amount(30.0)));
        assert_eq!(Amount::from_cents(u64::MAX).checked_mul(2), None);
        assert_eq!(Amount::from_units(5), Some(amount(5.0)));
    }
}
