//! # The Store
//!
//! Single source of truth for the storefront: cart selection, session,
//! package catalog, and transaction history.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Store Operations                               │
//! │                                                                     │
//! │  Screen Action              Store Call              State Change    │
//! │  ─────────────              ──────────              ────────────    │
//! │                                                                     │
//! │  Type Riot ID ─────────────► set_user_identifier ─► cart field      │
//! │  Tap package card ─────────► select_package ──────► cart field      │
//! │  Tap payment row ──────────► select_payment ──────► cart field      │
//! │  Submit auth form ─────────► login ───────────────► session         │
//! │  Tap logout ───────────────► logout ──────────────► session + cart  │
//! │  Admin add/edit/delete ────► *_package ───────────► catalog         │
//! │  Confirm purchase ─────────► record_transaction ──► history         │
//! │                                                                     │
//! │  Every mutation is synchronous and immediately visible to readers.  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Selection Identity
//! The cart holds the selected package **by id** and resolves it against the
//! catalog on every read. An admin edit is therefore visible through an
//! existing selection, and deleting the selected entry clears the selection
//! in the same logical step with no dangling intermediate state.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use topup_core::{
    default_catalog, CartStatus, CoreResult, Money, NewPackage, Package, PackageUpdate,
    PaymentMethod, Session, StoreError, Transaction, TransactionStatus,
};

use crate::ids::IdSource;

// =============================================================================
// Store
// =============================================================================

/// Process-wide, in-memory state container for the storefront.
///
/// ## Invariants
/// - Catalog ids are unique; newly assigned ids strictly increase
/// - A set selection always names a live catalog id
/// - `is_admin` changes only through `login`/`logout`
/// - Transactions are append-only, newest first, never mutated
#[derive(Debug, Clone)]
pub struct Store {
    user_identifier: String,
    selected_package: Option<i64>,
    selected_payment: Option<PaymentMethod>,
    session: Session,
    dark_mode: bool,
    packages: Vec<Package>,
    transactions: Vec<Transaction>,
    ids: IdSource,
}

impl Store {
    /// Creates a store with an anonymous session and the seed catalog.
    pub fn new() -> Self {
        Store::with_catalog(default_catalog())
    }

    /// Creates a store around a caller-supplied catalog.
    ///
    /// The id source is floored above the highest existing id so seeded
    /// entries can never collide with store-assigned ones.
    pub fn with_catalog(packages: Vec<Package>) -> Self {
        let floor = packages.iter().map(|p| p.id).max().unwrap_or(0);
        Store {
            user_identifier: String::new(),
            selected_package: None,
            selected_payment: None,
            session: Session::anonymous(),
            dark_mode: false,
            packages,
            transactions: Vec::new(),
            ids: IdSource::starting_after(floor),
        }
    }

    // =========================================================================
    // Cart Mutators
    // =========================================================================

    /// Replaces the account identifier. Any string is accepted, including
    /// the empty one; format is not the store's concern.
    pub fn set_user_identifier(&mut self, identifier: impl Into<String>) {
        self.user_identifier = identifier.into();
    }

    /// Selects a catalog entry by id.
    ///
    /// Unknown ids are ignored so the selection invariant holds: a set
    /// selection always names a live catalog entry.
    pub fn select_package(&mut self, id: i64) {
        if self.packages.iter().any(|p| p.id == id) {
            debug!(package_id = id, "select_package");
            self.selected_package = Some(id);
        } else {
            debug!(package_id = id, "select_package ignored: not in catalog");
        }
    }

    /// Selects a payment channel. Payment methods are static reference data,
    /// so there is no catalog to check against; the value is taken as given.
    pub fn select_payment(&mut self, method: PaymentMethod) {
        debug!(payment_id = method.id, "select_payment");
        self.selected_payment = Some(method);
    }

    /// Clears identifier, package, and payment selection. Idempotent.
    pub fn reset_cart(&mut self) {
        debug!("reset_cart");
        self.user_identifier.clear();
        self.selected_package = None;
        self.selected_payment = None;
    }

    // =========================================================================
    // Session Mutators
    // =========================================================================

    /// Starts an authenticated session for `email`.
    ///
    /// No credential check happens here or anywhere else; the auth modal is
    /// a UI-only gate. The admin flag is derived from the email suffix once,
    /// at this moment.
    pub fn login(&mut self, email: &str) {
        self.session = Session::authenticated(email);
        info!(email = %email, is_admin = self.session.is_admin, "login");
    }

    /// Ends the session and unconditionally clears the cart.
    pub fn logout(&mut self) {
        info!(email = %self.session.user_email, "logout");
        self.session = Session::anonymous();
        self.reset_cart();
    }

    /// Flips the dark-mode preference.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    // =========================================================================
    // Catalog Mutators (admin)
    // =========================================================================

    /// Appends a new catalog entry with a fresh store-assigned id and
    /// returns it. Display order is catalog order, so the entry lands last.
    pub fn add_package(&mut self, fields: NewPackage) -> Package {
        let package = Package {
            id: self.ids.next(),
            vp_amount: fields.vp_amount,
            bonus_vp: fields.bonus_vp,
            price_minor: fields.price_minor,
            is_popular: fields.is_popular,
        };
        info!(package_id = package.id, vp = package.vp_amount, "add_package");
        self.packages.push(package.clone());
        package
    }

    /// Merges `patch` into the entry with `id`, preserving the id.
    ///
    /// Fails with [`StoreError::PackageNotFound`] for an unknown id; it can
    /// never create a duplicate. A selection holding this id sees the new
    /// values on its next read.
    pub fn update_package(&mut self, id: i64, patch: &PackageUpdate) -> CoreResult<Package> {
        let package = self
            .packages
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::PackageNotFound(id))?;

        patch.apply_to(package);
        info!(package_id = id, "update_package");
        Ok(package.clone())
    }

    /// Removes the entry with `id`. Unknown ids are a no-op.
    ///
    /// If the removed entry is the current selection, the selection is
    /// cleared as part of the same step.
    pub fn delete_package(&mut self, id: i64) {
        let before = self.packages.len();
        self.packages.retain(|p| p.id != id);

        if self.packages.len() == before {
            debug!(package_id = id, "delete_package ignored: not in catalog");
            return;
        }

        info!(package_id = id, "delete_package");
        if self.selected_package == Some(id) {
            self.selected_package = None;
        }
    }

    // =========================================================================
    // Purchase
    // =========================================================================

    /// Records the current cart as a transaction, if there is anything to
    /// record.
    ///
    /// Returns `None` without touching any state when the cart is not
    /// [`CartStatus::Complete`] or the session is anonymous — the original
    /// app only keeps history for logged-in buyers. The record freezes the
    /// cart contents and is prepended so history reads newest first.
    pub fn record_transaction(&mut self) -> Option<Transaction> {
        if self.cart_status() != CartStatus::Complete || !self.session.is_logged_in {
            return None;
        }

        // Complete status guarantees both selections resolve
        let package = self.selected_package()?.clone();
        let payment = self.selected_payment.clone()?;

        let transaction = Transaction {
            id: self.ids.next(),
            user_id: self.user_identifier.clone(),
            user_email: self.session.user_email.clone(),
            vp_amount: package.vp_amount,
            bonus_vp: package.bonus_vp,
            payment_method_name: payment.display_name,
            payment_icon: payment.icon,
            payment_fee_minor: payment.fee_minor,
            total_price_minor: (package.price() + Money::from_minor(payment.fee_minor)).minor(),
            created_at: chrono::Utc::now(),
            status: TransactionStatus::Success,
        };

        info!(
            transaction_id = transaction.id,
            total = transaction.total_price_minor,
            "record_transaction"
        );
        self.transactions.insert(0, transaction.clone());
        Some(transaction)
    }

    // =========================================================================
    // Derived Reads
    // =========================================================================

    /// The cart state machine position, determined purely by which of the
    /// three cart fields are set.
    pub fn cart_status(&self) -> CartStatus {
        let set = [
            !self.user_identifier.is_empty(),
            self.selected_package.is_some(),
            self.selected_payment.is_some(),
        ];

        match set.iter().filter(|&&s| s).count() {
            0 => CartStatus::Empty,
            3 => CartStatus::Complete,
            _ => CartStatus::Partial,
        }
    }

    /// Package price plus payment fee when both are selected, else zero.
    /// Derived on read, never stored.
    pub fn cart_total(&self) -> Money {
        match (self.selected_package(), &self.selected_payment) {
            (Some(package), Some(payment)) => package.price() + payment.fee(),
            _ => Money::zero(),
        }
    }

    /// The selected catalog entry, resolved by id at read time.
    pub fn selected_package(&self) -> Option<&Package> {
        let id = self.selected_package?;
        self.packages.iter().find(|p| p.id == id)
    }

    /// The selected payment channel.
    pub fn selected_payment(&self) -> Option<&PaymentMethod> {
        self.selected_payment.as_ref()
    }

    /// The current account identifier field.
    pub fn user_identifier(&self) -> &str {
        &self.user_identifier
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The dark-mode preference.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// The catalog in display order.
    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    /// Full transaction log, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The history view for one account: transactions made under `email`,
    /// newest first. Storage is shared; only this read is partitioned.
    pub fn transactions_for(&self, email: &str) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.user_email == email)
            .cloned()
            .collect()
    }

    /// A read-only snapshot of everything the screens render.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            user_identifier: self.user_identifier.clone(),
            selected_package: self.selected_package().cloned(),
            selected_payment: self.selected_payment.clone(),
            is_logged_in: self.session.is_logged_in,
            user_email: self.session.user_email.clone(),
            is_admin: self.session.is_admin,
            dark_mode: self.dark_mode,
            packages: self.packages.clone(),
            transactions: self.transactions.clone(),
            cart_status: self.cart_status(),
            cart_total_minor: self.cart_total().minor(),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Snapshot
// =============================================================================

/// Immutable view of the store handed to the presentation layer.
///
/// Views must treat this as frozen per read and go through the store's
/// mutators for every change; the snapshot is a clone, so writing to it
/// affects nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub user_identifier: String,
    pub selected_package: Option<Package>,
    pub selected_payment: Option<PaymentMethod>,
    pub is_logged_in: bool,
    pub user_email: String,
    pub is_admin: bool,
    pub dark_mode: bool,
    pub packages: Vec<Package>,
    pub transactions: Vec<Transaction>,
    pub cart_status: CartStatus,
    pub cart_total_minor: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
