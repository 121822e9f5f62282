//! # Error Types
//!
//! Domain-specific error types for topup-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  topup-core errors (this file)                                      │
//! │  ├── StoreError       - Catalog operation failures                  │
//! │  └── ValidationError  - Form input validation failures              │
//! │                                                                     │
//! │  Flow: ValidationError → surfaced inline in the form                │
//! │        StoreError      → surfaced by the admin catalog screen       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store's mutators are otherwise total functions: a delete of a missing
//! id is a no-op, not an error. Validation runs caller-side before the store
//! is invoked, and every failure is locally recoverable by editing the form.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, field name)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Catalog operation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The catalog has no entry with this id.
    ///
    /// Raised by `update_package` only: updating a missing entry must not
    /// silently create a duplicate, so it fails loudly instead.
    #[error("package not found: {0}")]
    PackageNotFound(i64),

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Form input validation errors.
///
/// These occur when user input doesn't meet requirements, before any store
/// mutation runs. The user edits and resubmits; nothing is fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// A numeric form field failed to parse.
    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    /// A numeric field came out negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: &'static str },

    /// Registration password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type CoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::PackageNotFound(1_700_000_000_000);
        assert_eq!(err.to_string(), "package not found: 1700000000000");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required { field: "email" };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::NotANumber { field: "price" };
        assert_eq!(err.to_string(), "price must be a number");

        assert_eq!(
            ValidationError::PasswordMismatch.to_string(),
            "passwords do not match"
        );
    }

    #[test]
    fn test_validation_converts_to_store_error() {
        let validation_err = ValidationError::Required { field: "vp_amount" };
        let store_err: StoreError = validation_err.into();
        assert!(matches!(store_err, StoreError::Validation(_)));
    }
}
