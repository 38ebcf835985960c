//! Monetary amounts rendered with two decimal places.
//!
//! Uses `rust_decimal` internally so that rates like `1.5` add up exactly
//! and statement totals never drift the way binary floats do.

use crate::error::{RentalError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An exact monetary amount.
///
/// Arithmetic keeps full precision and is checked; only
/// [`Display`](fmt::Display) rounds to [`Money::DISPLAY_SCALE`] places.
/// Serialization writes the exact value.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use rental_statement::Money;
///
/// let amount = Money::from_str("3.5").unwrap();
/// assert_eq!(amount.to_string(), "3.50");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    /// Number of decimal places shown on statements.
    pub const DISPLAY_SCALE: u32 = 2;

    /// Zero value.
    pub const ZERO: Self = Money(Decimal::ZERO);

    /// Wraps a `Decimal` without changing its precision.
    pub const fn new(value: Decimal) -> Self {
        Money(value)
    }

    /// Builds an amount from an integer mantissa and a scale,
    /// e.g. `Money::from_parts(15, 1)` is `1.5`.
    pub fn from_parts(mantissa: i64, scale: u32) -> Self {
        Money(Decimal::new(mantissa, scale))
    }

    /// Returns the underlying decimal value.
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Returns `true` if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Adds two amounts, failing instead of overflowing.
    pub fn checked_add(self, rhs: Money) -> Result<Money> {
        self.0
            .checked_add(rhs.0)
            .map(Money)
            .ok_or_else(|| RentalError::AmountOverflow(format!("{} + {}", self.0, rhs.0)))
    }

    /// Multiplies by a whole number of units, failing instead of overflowing.
    pub fn checked_mul(self, factor: i64) -> Result<Money> {
        self.0
            .checked_mul(Decimal::from(factor))
            .map(Money)
            .ok_or_else(|| RentalError::AmountOverflow(format!("{} x {}", self.0, factor)))
    }

    /// Sums amounts, failing on the first overflow.
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Result<Money> {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, |acc, amount| acc.checked_add(amount))
    }

    /// Value rounded half away from zero to the display scale.
    pub fn rounded(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(Self::DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money(value)
    }
}

impl FromStr for Money {
    type Err = RentalError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .map(Money)
            .map_err(|e| RentalError::InvalidAmount(format!("{trimmed:?}: {e}")))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}

impl Serialize for Money {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Money::from_str(&s).map_err(serde::de::Error::custom)
    }
}
