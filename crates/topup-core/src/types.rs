//! # Domain Types
//!
//! Core domain types for the VP top-up storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐   ┌────────────────┐      │
//! │  │    Package     │   │ PaymentMethod  │   │  Transaction   │      │
//! │  │  ────────────  │   │  ────────────  │   │  ────────────  │      │
//! │  │  id (millis)   │   │  id            │   │  id (millis)   │      │
//! │  │  vp_amount     │   │  display_name  │   │  user_email    │      │
//! │  │  bonus_vp      │   │  icon          │   │  total_minor   │      │
//! │  │  price_minor   │   │  fee_minor     │   │  created_at    │      │
//! │  └────────────────┘   └────────────────┘   └────────────────┘      │
//! │                                                                     │
//! │  ┌────────────────┐   ┌────────────────┐                           │
//! │  │    Session     │   │  CartStatus    │                           │
//! │  │  ────────────  │   │  ────────────  │                           │
//! │  │  is_logged_in  │   │  Empty         │                           │
//! │  │  user_email    │   │  Partial       │                           │
//! │  │  is_admin      │   │  Complete      │                           │
//! │  └────────────────┘   └────────────────┘                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Catalog entries and transactions use store-assigned millisecond ids that
//! are strictly increasing and never reused. Payment methods are static
//! reference data owned by the presentation layer; they are never stored in
//! the catalog and carry small fixed ids.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Package
// =============================================================================

/// A catalog offer: a VP amount (plus optional bonus) at a price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Package {
    /// Store-assigned unique identifier (millisecond-derived, never reused).
    pub id: i64,

    /// VP credited on purchase.
    pub vp_amount: i64,

    /// Extra VP granted on top of `vp_amount`.
    pub bonus_vp: i64,

    /// Price in minor currency units.
    pub price_minor: i64,

    /// Highlighted with a "HOT" badge in the storefront grid.
    pub is_popular: bool,
}

impl Package {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_minor(self.price_minor)
    }

    /// Total VP delivered, base plus bonus.
    #[inline]
    pub fn total_vp(&self) -> i64 {
        self.vp_amount + self.bonus_vp
    }
}

/// Fields for creating a catalog entry. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewPackage {
    pub vp_amount: i64,

    /// Defaults to 0 when the admin form leaves the field blank.
    #[serde(default)]
    pub bonus_vp: i64,

    pub price_minor: i64,

    #[serde(default)]
    pub is_popular: bool,
}

/// A merge-patch for an existing catalog entry.
///
/// `None` fields are left untouched; the id is never part of the patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PackageUpdate {
    pub vp_amount: Option<i64>,
    pub bonus_vp: Option<i64>,
    pub price_minor: Option<i64>,
    pub is_popular: Option<bool>,
}

impl PackageUpdate {
    /// Applies this patch to a catalog entry in place, preserving its id.
    pub fn apply_to(&self, package: &mut Package) {
        if let Some(vp) = self.vp_amount {
            package.vp_amount = vp;
        }
        if let Some(bonus) = self.bonus_vp {
            package.bonus_vp = bonus;
        }
        if let Some(price) = self.price_minor {
            package.price_minor = price;
        }
        if let Some(popular) = self.is_popular {
            package.is_popular = popular;
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// A static payment channel with a flat fee.
///
/// Not persisted in the store: the presentation layer owns the list as a
/// constant and the cart references one by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentMethod {
    pub id: i64,
    pub display_name: String,
    pub icon: String,

    /// Flat fee in minor currency units added to the package price.
    pub fee_minor: i64,
}

impl PaymentMethod {
    /// Returns the fee as a Money type.
    #[inline]
    pub fn fee(&self) -> Money {
        Money::from_minor(self.fee_minor)
    }
}

/// The payment channels offered by the storefront.
///
/// E-wallets carry a flat Rp 5.000 fee; card and PayPal are free.
pub fn default_payment_methods() -> Vec<PaymentMethod> {
    let channels: [(i64, &str, &str, i64); 5] = [
        (1, "Credit/Debit Card", "💳", 0),
        (2, "PayPal", "🅿️", 0),
        (3, "GoPay", "🟢", 5_000),
        (4, "OVO", "🟣", 5_000),
        (5, "DANA", "🔵", 5_000),
    ];

    channels
        .into_iter()
        .map(|(id, name, icon, fee)| PaymentMethod {
            id,
            display_name: name.to_string(),
            icon: icon.to_string(),
            fee_minor: fee,
        })
        .collect()
}

// =============================================================================
// Transaction
// =============================================================================

/// The status of a recorded purchase.
///
/// Purchases are simulated and always succeed, so `Success` is currently the
/// only state a record can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Success,
}

impl Default for TransactionStatus {
    fn default() -> Self {
        TransactionStatus::Success
    }
}

/// An immutable record of a completed purchase.
///
/// Uses the snapshot pattern: package and payment data are frozen at purchase
/// time, so later catalog edits never rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Transaction {
    /// Store-assigned unique identifier (millisecond-derived).
    pub id: i64,

    /// The in-game account identifier the VP was credited to.
    pub user_id: String,

    /// Email of the session that made the purchase. History screens filter
    /// on this; storage itself is not partitioned per user.
    pub user_email: String,

    /// VP amount at time of purchase (frozen).
    pub vp_amount: i64,

    /// Bonus VP at time of purchase (frozen).
    pub bonus_vp: i64,

    /// Payment channel name at time of purchase (frozen).
    pub payment_method_name: String,

    /// Payment channel icon at time of purchase (frozen).
    pub payment_icon: String,

    /// Payment fee in minor units at time of purchase (frozen).
    pub payment_fee_minor: i64,

    /// Package price plus payment fee, in minor units.
    pub total_price_minor: i64,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    pub status: TransactionStatus,
}

impl Transaction {
    /// Returns the total charged as Money.
    #[inline]
    pub fn total_price(&self) -> Money {
        Money::from_minor(self.total_price_minor)
    }
}

// =============================================================================
// Session
// =============================================================================

/// The logged-in/anonymous state plus the derived admin flag.
///
/// There is no token and no expiry: the session lives exactly as long as the
/// owning store instance. `is_admin` is computed once at login and never
/// re-derived afterwards, so a hypothetical post-login email change would not
/// retroactively grant or revoke admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Session {
    pub is_logged_in: bool,
    pub user_email: String,
    pub is_admin: bool,
}

impl Session {
    /// The anonymous session: logged out, no email, no admin.
    pub fn anonymous() -> Self {
        Session {
            is_logged_in: false,
            user_email: String::new(),
            is_admin: false,
        }
    }

    /// An authenticated session for `email`, with admin derived from the
    /// address suffix. Credentials are accepted without verification;
    /// registration and login converge on this same effect.
    pub fn authenticated(email: &str) -> Self {
        Session {
            is_logged_in: true,
            user_email: email.to_string(),
            is_admin: is_admin_email(email),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::anonymous()
    }
}

/// True iff the email's lowercase form ends with the literal `@admin.com`.
///
/// This is the only admin gate in the system.
pub fn is_admin_email(email: &str) -> bool {
    email.to_lowercase().ends_with("@admin.com")
}

// =============================================================================
// Cart Status
// =============================================================================

/// The cart state machine, determined purely by which fields are set.
///
/// ```text
/// Empty ──set any field──► Partial ──set all three──► Complete
///   ▲                                                     │
///   └────────────── reset_cart / logout ──────────────────┘
/// ```
///
/// `Complete` is what enables the purchase action in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CartStatus {
    Empty,
    Partial,
    Complete,
}

// =============================================================================
// Seed Catalog
// =============================================================================

/// The six launch packages (IDR pricing), displayed in insertion order.
pub fn default_catalog() -> Vec<Package> {
    let rows: [(i64, i64, i64, i64, bool); 6] = [
        (1, 475, 0, 75_000, false),
        (2, 1_000, 0, 150_000, false),
        (3, 2_050, 150, 300_000, true),
        (4, 3_650, 400, 525_000, false),
        (5, 5_350, 850, 750_000, false),
        (6, 11_000, 2_000, 1_500_000, false),
    ];

    rows.into_iter()
        .map(|(id, vp, bonus, price, popular)| Package {
            id,
            vp_amount: vp,
            bonus_vp: bonus,
            price_minor: price,
            is_popular: popular,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_admin_email_case_insensitive() {
        assert!(is_admin_email("root@admin.com"));
        assert!(is_admin_email("Admin@Admin.COM"));
        assert!(!is_admin_email("user@example.com"));
        assert!(!is_admin_email("admin.com@user.net"));
        assert!(!is_admin_email(""));
    }

    #[test]
    fn test_session_authenticated_derives_admin_once() {
        let session = Session::authenticated("Staff@ADMIN.com");
        assert!(session.is_logged_in);
        assert!(session.is_admin);
        assert_eq!(session.user_email, "Staff@ADMIN.com");

        let session = Session::authenticated("player@example.com");
        assert!(!session.is_admin);
    }

    #[test]
    fn test_session_anonymous() {
        let session = Session::anonymous();
        assert!(!session.is_logged_in);
        assert!(!session.is_admin);
        assert!(session.user_email.is_empty());
        assert_eq!(Session::default(), session);
    }

    #[test]
    fn test_default_catalog_ids_unique_and_ordered() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 6);

        let ids: Vec<i64> = catalog.iter().map(|p| p.id).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);

        // Only the 2050 VP package carries the HOT badge
        let popular: Vec<&Package> = catalog.iter().filter(|p| p.is_popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].vp_amount, 2_050);
    }

    #[test]
    fn test_package_total_vp() {
        let catalog = default_catalog();
        assert_eq!(catalog[2].total_vp(), 2_200); // 2050 + 150 bonus
        assert_eq!(catalog[0].total_vp(), 475);
    }

    #[test]
    fn test_default_payment_methods_fees() {
        let methods = default_payment_methods();
        assert_eq!(methods.len(), 5);

        // Card and PayPal are free, e-wallets charge a flat fee
        assert_eq!(methods[0].fee(), Money::zero());
        assert_eq!(methods[1].fee(), Money::zero());
        for wallet in &methods[2..] {
            assert_eq!(wallet.fee(), Money::from_minor(5_000));
        }
    }

    #[test]
    fn test_package_update_merges_and_preserves_id() {
        let mut package = default_catalog().remove(0);
        let original_id = package.id;

        let patch = PackageUpdate {
            price_minor: Some(80_000),
            is_popular: Some(true),
            ..PackageUpdate::default()
        };
        patch.apply_to(&mut package);

        assert_eq!(package.id, original_id);
        assert_eq!(package.price_minor, 80_000);
        assert!(package.is_popular);
        // Untouched fields survive the merge
        assert_eq!(package.vp_amount, 475);
        assert_eq!(package.bonus_vp, 0);
    }

    #[test]
    fn test_new_package_serde_defaults() {
        let parsed: NewPackage =
            serde_json::from_str(r#"{"vp_amount":1000,"price_minor":150000}"#).unwrap();
        assert_eq!(parsed.bonus_vp, 0);
        assert!(!parsed.is_popular);
    }

    #[test]
    fn test_transaction_status_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionStatus::Success).unwrap();
        assert_eq!(json, r#""success""#);
    }
}
