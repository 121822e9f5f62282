//! # topup-core: Pure Domain Logic for the VP Top-Up Store
//!
//! This crate contains the domain model of the top-up storefront as pure
//! functions and data types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Top-Up Store Architecture                       │
//! │                                                                     │
//! │  ┌─────────────────────────────────────────────────────────────┐   │
//! │  │                Storefront UI (React Native)                 │   │
//! │  │   User ID ──► Package Grid ──► Payment ──► Order Summary    │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │ in-process API                     │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │                 topup-store (state container)               │   │
//! │  │   Store, StoreState, Checkout, snapshots                    │   │
//! │  └────────────────────────────┬────────────────────────────────┘   │
//! │                               │                                    │
//! │  ┌────────────────────────────▼────────────────────────────────┐   │
//! │  │               ★ topup-core (THIS CRATE) ★                   │   │
//! │  │                                                             │   │
//! │  │  ┌──────────┐ ┌──────────┐ ┌────────────┐ ┌─────────────┐  │   │
//! │  │  │  types   │ │  money   │ │ validation │ │   format    │  │   │
//! │  │  │ Package  │ │  Money   │ │   forms    │ │  Rp / $ /   │  │   │
//! │  │  │ Session  │ │          │ │            │ │  timestamps │  │   │
//! │  │  └──────────┘ └──────────┘ └────────────┘ └─────────────┘  │   │
//! │  │                                                             │   │
//! │  │  NO I/O • NO TIMERS • PURE FUNCTIONS                        │   │
//! │  └─────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Package, PaymentMethod, Transaction, Session)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Caller-side form validation
//! - [`format`] - Currency and timestamp display helpers
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Network, file system, timers are FORBIDDEN here
//! 3. **Integer Money**: All monetary values are minor units (i64), never floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod format;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use topup_core::Money` instead of
// `use topup_core::money::Money`

pub use error::{CoreResult, StoreError, ValidationError};
pub use money::Money;
pub use types::*;
