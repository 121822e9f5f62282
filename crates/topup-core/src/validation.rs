//! # Validation Module
//!
//! Caller-side form validation for the storefront screens.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Screen (TypeScript)                                       │
//! │  ├── Basic format checks (empty, length)                            │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE                                               │
//! │  ├── Required fields (email, password, VP, price)                   │
//! │  ├── Numeric parsing of the admin package form                      │
//! │  └── Password/confirmation match on registration                    │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Store mutators (total functions, no validation of their own)       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store deliberately performs no validation: any string is a legal
//! account identifier and any email is accepted at login. These checks exist
//! so the screens can block a submit before it reaches the store.
//!
//! ## Usage
//! ```rust
//! use topup_core::validation::{validate_login_form, parse_package_form};
//!
//! validate_login_form("user@example.com", "hunter2").unwrap();
//!
//! let pkg = parse_package_form("2050", "150", "300000", true).unwrap();
//! assert_eq!(pkg.price_minor, 300_000);
//! ```

use crate::error::ValidationError;
use crate::types::NewPackage;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Auth Forms
// =============================================================================

/// Validates the login form.
///
/// ## Rules
/// - Email and password must both be non-empty
/// - No credential verification happens anywhere: authentication is a
///   UI-only gate, and the store accepts whatever email it is given
pub fn validate_login_form(email: &str, password: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::Required { field: "email" });
    }

    if password.is_empty() {
        return Err(ValidationError::Required { field: "password" });
    }

    Ok(())
}

/// Validates the registration form.
///
/// Same rules as login, plus the confirmation field must match the password
/// exactly. Registration and login converge on the same store effect.
pub fn validate_registration_form(
    email: &str,
    password: &str,
    confirm_password: &str,
) -> ValidationResult<()> {
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }

    validate_login_form(email, password)
}

// =============================================================================
// Admin Package Form
// =============================================================================

/// Parses the admin "add package" form into a [`NewPackage`].
///
/// ## Rules
/// - VP amount and price are required; bonus is optional and defaults to 0
/// - All three must parse as non-negative integers (minor units for price)
///
/// ## User Workflow
/// ```text
/// Admin fills in:  VP [2050]  Bonus [150]  Price [300000]  ☑ Popular
///       │
///       ▼
/// parse_package_form(...) ← THIS FUNCTION
///       │
///       ├── empty VP/price?  → Required
///       ├── parse failure?   → NotANumber
///       ├── negative value?  → MustBeNonNegative
///       │
///       └── OK → store.add_package(new_package)
/// ```
pub fn parse_package_form(
    vp_amount: &str,
    bonus_vp: &str,
    price: &str,
    is_popular: bool,
) -> ValidationResult<NewPackage> {
    let vp_amount = parse_required_amount(vp_amount, "vp_amount")?;
    let price_minor = parse_required_amount(price, "price")?;

    let bonus_vp = match bonus_vp.trim() {
        "" => 0,
        raw => parse_amount(raw, "bonus_vp")?,
    };

    Ok(NewPackage {
        vp_amount,
        bonus_vp,
        price_minor,
        is_popular,
    })
}

fn parse_required_amount(raw: &str, field: &'static str) -> ValidationResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required { field });
    }
    parse_amount(raw, field)
}

fn parse_amount(raw: &str, field: &'static str) -> ValidationResult<i64> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotANumber { field })?;

    if value < 0 {
        return Err(ValidationError::MustBeNonNegative { field });
    }

    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form() {
        assert!(validate_login_form("user@example.com", "secret").is_ok());
        assert_eq!(
            validate_login_form("", "secret"),
            Err(ValidationError::Required { field: "email" })
        );
        assert_eq!(
            validate_login_form("   ", "secret"),
            Err(ValidationError::Required { field: "email" })
        );
        assert_eq!(
            validate_login_form("user@example.com", ""),
            Err(ValidationError::Required { field: "password" })
        );
    }

    #[test]
    fn test_registration_form_mismatch_wins() {
        assert_eq!(
            validate_registration_form("user@example.com", "secret", "other"),
            Err(ValidationError::PasswordMismatch)
        );
        assert!(validate_registration_form("user@example.com", "secret", "secret").is_ok());
    }

    #[test]
    fn test_parse_package_form_ok() {
        let pkg = parse_package_form("2050", "150", "300000", true).unwrap();
        assert_eq!(pkg.vp_amount, 2_050);
        assert_eq!(pkg.bonus_vp, 150);
        assert_eq!(pkg.price_minor, 300_000);
        assert!(pkg.is_popular);
    }

    #[test]
    fn test_parse_package_form_blank_bonus_defaults_to_zero() {
        let pkg = parse_package_form("1000", "", "150000", false).unwrap();
        assert_eq!(pkg.bonus_vp, 0);
    }

    #[test]
    fn test_parse_package_form_rejects_bad_input() {
        assert_eq!(
            parse_package_form("", "", "150000", false),
            Err(ValidationError::Required { field: "vp_amount" })
        );
        assert_eq!(
            parse_package_form("1000", "", "", false),
            Err(ValidationError::Required { field: "price" })
        );
        assert_eq!(
            parse_package_form("lots", "", "150000", false),
            Err(ValidationError::NotANumber { field: "vp_amount" })
        );
        assert_eq!(
            parse_package_form("1000", "-5", "150000", false),
            Err(ValidationError::MustBeNonNegative { field: "bonus_vp" })
        );
    }
}
