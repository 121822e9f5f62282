//! # Display Formatting
//!
//! Pure presentation helpers for the storefront screens: currency and
//! timestamp rendering. These are functions of store data only and hold no
//! state of their own.
//!
//! The store always keeps the raw integer amount; which rendering a screen
//! uses is purely a locale choice. Both shipped storefront variants are
//! supported: the zero-decimal Rupiah catalog and the two-decimal Dollar one.

use chrono::{DateTime, Utc};

use crate::money::Money;

// =============================================================================
// Currency
// =============================================================================

/// The display locale for monetary amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    /// Zero-decimal: minor unit is the rupiah itself. `Rp 305.000`
    Rupiah,
    /// Two-decimal: minor unit is the cent. `$4.99`
    Dollar,
}

impl Currency {
    /// Formats an amount for display in this locale.
    ///
    /// ## Example
    /// ```rust
    /// use topup_core::format::Currency;
    /// use topup_core::money::Money;
    ///
    /// assert_eq!(Currency::Rupiah.format(Money::from_minor(305_000)), "Rp 305.000");
    /// assert_eq!(Currency::Dollar.format(Money::from_minor(499)), "$4.99");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let minor = amount.minor().unsigned_abs();

        match self {
            Currency::Rupiah => format!("{sign}Rp {}", group_thousands(minor, '.')),
            Currency::Dollar => {
                let major = minor / 100;
                let cents = minor % 100;
                format!("{sign}${}.{cents:02}", group_thousands(major, ','))
            }
        }
    }
}

/// Groups digits in threes: `1500000` → `1.500.000` (or `1,500,000`).
fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}

// =============================================================================
// Timestamps
// =============================================================================

/// Formats a transaction timestamp for the history screen.
///
/// ## Example
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use topup_core::format::format_timestamp;
///
/// let at = Utc.with_ymd_and_hms(2026, 8, 26, 14, 30, 0).unwrap();
/// assert_eq!(format_timestamp(at), "26 Aug 2026, 14:30");
/// ```
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%d %b %Y, %H:%M").to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rupiah_grouping() {
        assert_eq!(Currency::Rupiah.format(Money::from_minor(0)), "Rp 0");
        assert_eq!(Currency::Rupiah.format(Money::from_minor(5_000)), "Rp 5.000");
        assert_eq!(
            Currency::Rupiah.format(Money::from_minor(305_000)),
            "Rp 305.000"
        );
        assert_eq!(
            Currency::Rupiah.format(Money::from_minor(1_500_000)),
            "Rp 1.500.000"
        );
    }

    #[test]
    fn test_dollar_two_decimals() {
        assert_eq!(Currency::Dollar.format(Money::from_minor(499)), "$4.99");
        assert_eq!(Currency::Dollar.format(Money::from_minor(9_999)), "$99.99");
        assert_eq!(Currency::Dollar.format(Money::from_minor(50)), "$0.50");
        assert_eq!(
            Currency::Dollar.format(Money::from_minor(1_500_000)),
            "$15,000.00"
        );
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(
            Currency::Rupiah.format(Money::from_minor(-5_000)),
            "-Rp 5.000"
        );
        assert_eq!(Currency::Dollar.format(Money::from_minor(-499)), "-$4.99");
    }

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2026, 1, 5, 9, 7, 59).unwrap();
        assert_eq!(format_timestamp(at), "05 Jan 2026, 09:07");
    }
}
