//! # Checkout Flow
//!
//! Orchestrates the purchase workflow on top of the store.
//!
//! ## Purchase Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Purchase Lifecycle                             │
//! │                                                                     │
//! │  ┌─────────┐      ┌──────────┐      ┌──────────┐      ┌─────────┐  │
//! │  │  Cart   │─────►│ Purchase │─────►│ Success  │─────►│  Cart   │  │
//! │  │Complete │      │          │      │  Banner  │      │  Reset  │  │
//! │  └─────────┘      └──────────┘      └──────────┘      └─────────┘  │
//! │       │                │                  │                        │
//! │  all three      record_transaction   fixed duration,               │
//! │  fields set     (logged in only)     then deferred                 │
//! │                                      reset_cart                    │
//! │                                                                    │
//! │  Incomplete cart: purchase is a no-op (the UI disables the         │
//! │  button, this gate is the backstop).                               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cancellation
//! The deferred reset is the only cancellation contract in the system: if
//! the checkout is torn down while the banner is still showing, the pending
//! reset is aborted so it cannot mutate a discarded store. The reset body
//! runs entirely inside one lock acquisition with no await inside, so an
//! abort either cancels it wholesale at the sleep or lets it finish — never
//! halfway.

use std::sync::Mutex;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use topup_core::{CartStatus, Money, Transaction};

use crate::state::StoreState;

/// How long the success banner stays up before the cart clears.
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(3);

/// The result of a purchase attempt.
#[derive(Debug, Clone)]
pub enum PurchaseOutcome {
    /// The cart was not complete; nothing happened.
    NotReady,

    /// The purchase went through. `transaction` is `Some` only for
    /// logged-in buyers; anonymous purchases leave no history.
    Completed {
        transaction: Option<Transaction>,
        total: Money,
    },
}

/// Purchase orchestrator owning the deferred-reset timer.
///
/// Construct one per store handle; dropping it cancels any pending reset.
#[derive(Debug)]
pub struct Checkout {
    store: StoreState,
    banner_duration: Duration,
    pending_reset: Mutex<Option<JoinHandle<()>>>,
}

impl Checkout {
    /// Creates a checkout with the standard banner duration.
    pub fn new(store: StoreState) -> Self {
        Checkout::with_banner_duration(store, SUCCESS_BANNER_DURATION)
    }

    /// Creates a checkout with a custom banner duration.
    pub fn with_banner_duration(store: StoreState, banner_duration: Duration) -> Self {
        Checkout {
            store,
            banner_duration,
            pending_reset: Mutex::new(None),
        }
    }

    /// Attempts the purchase.
    ///
    /// On a complete cart this records a transaction (logged-in sessions
    /// only), reports the charged total, and schedules the cart reset for
    /// when the success banner has run its course. On an incomplete cart it
    /// does nothing.
    ///
    /// Must be called from within a tokio runtime: the deferred reset is a
    /// spawned task.
    pub fn purchase(&self) -> PurchaseOutcome {
        let recorded = self.store.with_store_mut(|store| {
            if store.cart_status() != CartStatus::Complete {
                return None;
            }
            let total = store.cart_total();
            let transaction = store.record_transaction();
            Some((transaction, total))
        });

        match recorded {
            None => {
                debug!("purchase attempted with incomplete cart");
                PurchaseOutcome::NotReady
            }
            Some((transaction, total)) => {
                info!(total = total.minor(), "purchase completed");
                self.schedule_reset();
                PurchaseOutcome::Completed { transaction, total }
            }
        }
    }

    /// Cancels a pending deferred reset, if any.
    ///
    /// Called on teardown; also usable directly if a screen wants to keep
    /// the cart (e.g. the process is backgrounded mid-banner).
    pub fn cancel_pending_reset(&self) {
        let mut pending = self.pending_reset.lock().expect("Checkout mutex poisoned");
        if let Some(handle) = pending.take() {
            handle.abort();
            debug!("pending cart reset cancelled");
        }
    }

    /// Arms the banner timer. A new purchase supersedes any reset still
    /// pending from the previous one.
    fn schedule_reset(&self) {
        let store = self.store.clone();
        let banner = self.banner_duration;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(banner).await;
            store.with_store_mut(|s| s.reset_cart());
            debug!("cart reset after success banner");
        });

        let mut pending = self.pending_reset.lock().expect("Checkout mutex poisoned");
        if let Some(previous) = pending.replace(handle) {
            previous.abort();
        }
    }
}

impl Drop for Checkout {
    fn drop(&mut self) {
        self.cancel_pending_reset();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use topup_core::default_payment_methods;

    fn ready_store(logged_in: bool) -> StoreState {
        let state = StoreState::new();
        state.with_store_mut(|store| {
            if logged_in {
                store.login("player@example.com");
            }
            store.set_user_identifier("Player#1234");
            let id = store.packages()[2].id; // 300000
            store.select_package(id);
            store.select_payment(default_payment_methods().remove(2)); // +5000
        });
        state
    }

    #[tokio::test(start_paused = true)]
    async fn test_purchase_with_incomplete_cart_is_noop() {
        let state = StoreState::new();
        let checkout = Checkout::new(state.clone());

        assert!(matches!(checkout.purchase(), PurchaseOutcome::NotReady));
        assert!(state.with_store(|s| s.transactions().is_empty()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_purchase_records_then_resets_after_banner() {
        let state = ready_store(true);
        let checkout = Checkout::new(state.clone());

        let outcome = checkout.purchase();
        let PurchaseOutcome::Completed { transaction, total } = outcome else {
            panic!("expected completed purchase");
        };
        assert_eq!(total, Money::from_minor(305_000));
        assert_eq!(transaction.unwrap().total_price_minor, 305_000);

        // Banner still showing: cart untouched
        assert_eq!(
            state.with_store(|s| s.cart_status()),
            CartStatus::Complete
        );

        tokio::time::sleep(SUCCESS_BANNER_DURATION + Duration::from_millis(50)).await;

        // Cart cleared, history preserved
        assert_eq!(state.with_store(|s| s.cart_status()), CartStatus::Empty);
        assert_eq!(state.with_store(|s| s.transactions().len()), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_anonymous_purchase_completes_without_history() {
        let state = ready_store(false);
        let checkout = Checkout::new(state.clone());

        let PurchaseOutcome::Completed { transaction, total } = checkout.purchase() else {
            panic!("expected completed purchase");
        };
        assert!(transaction.is_none());
        assert_eq!(total, Money::from_minor(305_000));

        tokio::time::sleep(SUCCESS_BANNER_DURATION + Duration::from_millis(50)).await;
        assert_eq!(state.with_store(|s| s.cart_status()), CartStatus::Empty);
        assert!(state.with_store(|s| s.transactions().is_empty()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_pending_reset_keeps_cart() {
        let state = ready_store(true);
        let checkout = Checkout::new(state.clone());

        checkout.purchase();
        checkout.cancel_pending_reset();

        tokio::time::sleep(SUCCESS_BANNER_DURATION * 2).await;
        assert_eq!(
            state.with_store(|s| s.cart_status()),
            CartStatus::Complete
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_reset() {
        let state = ready_store(true);

        {
            let checkout = Checkout::new(state.clone());
            checkout.purchase();
            // checkout torn down while the banner is showing
        }

        tokio::time::sleep(SUCCESS_BANNER_DURATION * 2).await;
        assert_eq!(
            state.with_store(|s| s.cart_status()),
            CartStatus::Complete
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_short_banner_duration_is_honored() {
        let state = ready_store(true);
        let checkout = Checkout::with_banner_duration(state.clone(), Duration::from_millis(100));

        checkout.purchase();
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(state.with_store(|s| s.cart_status()), CartStatus::Empty);
    }
}
