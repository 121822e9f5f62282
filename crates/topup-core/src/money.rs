//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                        │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Minor Units                                  │
//! │    IDR catalog: price 300000 + fee 5000 = 305000, exact             │
//! │    USD catalog: $4.99 is stored as 499                              │
//! │                                                                     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store always holds the raw integer total; whether it renders with
//! zero decimals (Rupiah) or two (Dollars) is a formatting concern, see
//! [`crate::format`].
//!
//! ## Usage
//! ```rust
//! use topup_core::money::Money;
//!
//! let price = Money::from_minor(300_000);
//! let fee = Money::from_minor(5_000);
//! assert_eq!((price + fee).minor(), 305_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: room for future refunds/adjustments
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use topup_core::money::Money;
    ///
    /// let fee = Money::from_minor(5_000);
    /// assert_eq!(fee.minor(), 5_000);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor(&self) -> i64 {
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

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the raw minor-unit amount.
///
/// ## Note
/// This is for debugging and logs. UI display goes through
/// [`crate::format::Currency::format`] to pick the locale style.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(305_000);
        assert_eq!(money.minor(), 305_000);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(300_000);
        let b = Money::from_minor(5_000);

        assert_eq!((a + b).minor(), 305_000);
        assert_eq!((a - b).minor(), 295_000);

        let mut c = a;
        c += b;
        assert_eq!(c.minor(), 305_000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [75_000, 150_000, 5_000]
            .iter()
            .map(|&m| Money::from_minor(m))
            .sum();
        assert_eq!(total.minor(), 230_000);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        assert_eq!(Money::default(), zero);

        assert!(Money::from_minor(-1).is_negative());
    }

    #[test]
    fn test_display_is_raw_minor() {
        assert_eq!(format!("{}", Money::from_minor(305_000)), "305000");
    }
}
