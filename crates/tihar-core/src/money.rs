//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Whole Rupees, Integer Only
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every price in the catalog is a whole number of rupees:                │
//! │    Natural Handmade Soap  ₹50                                           │
//! │    Handwoven Carpet       ₹2500                                         │
//! │                                                                         │
//! │  There is no minor unit, so the value is stored as-is in an i64.        │
//! │  Line totals, cart totals, order totals and donations all flow          │
//! │  through this type. No floats anywhere.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tihar_core::money::Money;
//!
//! let price = Money::from_rupees(50);
//!
//! let line_total = price * 2;
//! let total = line_total + Money::from_rupees(80);
//! assert_eq!(total.rupees(), 180);
//! assert_eq!(total.to_string(), "₹180");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole rupees.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction never wraps silently into huge values
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as a bare number**: the UI shows `₹{amount}` itself
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from a whole rupee amount.
    ///
    /// ```rust
    /// use tihar_core::money::Money;
    ///
    /// let price = Money::from_rupees(350);
    /// assert_eq!(price.rupees(), 350);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees)
    }

    /// Returns the amount in rupees.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use tihar_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(120);
    /// assert_eq!(unit_price.multiply_quantity(3).rupees(), 360);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Product: Mango Pickle ₹120
    /// Quantity: 3
    ///      │
    ///      ▼
    /// multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: ₹360
    /// ```
    ///
    /// Saturates at the `i64` bounds instead of overflowing.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount with the rupee sign, e.g. `₹2500` or `-₹50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-₹{}", self.0.unsigned_abs())
        } else {
            write!(f, "₹{}", self.0)
        }
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Totals are built by summing line amounts.
/// Saturating, so a cart total can never wrap negative.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| Money(acc.0.saturating_add(m.0)))
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_rupees(180).to_string(), "₹180");
        assert_eq!(Money::from_rupees(0).to_string(), "₹0");
        assert_eq!(Money::from_rupees(-50).to_string(), "-₹50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupees(1000);
        let b = Money::from_rupees(500);

        assert_eq!((a + b).rupees(), 1500);
        assert_eq!((a - b).rupees(), 500);
        assert_eq!((a * 3).rupees(), 3000);

        let mut c = a;
        c += b;
        assert_eq!(c.rupees(), 1500);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Money = Vec::<Money>::new().into_iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_sum_of_lines() {
        let lines = [Money::from_rupees(100), Money::from_rupees(80)];
        let total: Money = lines.iter().sum();
        assert_eq!(total.rupees(), 180);
    }

    #[test]
    fn test_large_amounts_saturate() {
        let price = Money::from_rupees(450);
        assert_eq!(price.multiply_quantity(i64::MAX).rupees(), i64::MAX);

        let total: Money = [Money::from_rupees(i64::MAX), Money::from_rupees(1)]
            .into_iter()
            .sum();
        assert_eq!(total.rupees(), i64::MAX);
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_rupees(1).is_positive());
        assert!(Money::from_rupees(-1).is_negative());
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Money::from_rupees(250)).unwrap();
        assert_eq!(json, "250");
    }
}
