//! # topup-store: State Container for the VP Top-Up Storefront
//!
//! The single source of truth the storefront screens read from and mutate
//! through. It holds the cart selection, the auth session, the package
//! catalog, and the locally-recorded transaction history — all in memory,
//! all synchronous, nothing persisted.
//!
//! ## Modules
//!
//! - [`store`] - The [`Store`] itself and its read-only [`StoreSnapshot`]
//! - [`state`] - [`StoreState`], the shared handle screens hold
//! - [`checkout`] - The purchase workflow and the success-banner timer
//! - [`ids`] - Monotonic time-derived id assignment
//!
//! ## Example
//!
//! ```rust
//! use topup_store::{Checkout, PurchaseOutcome, StoreState};
//! use topup_core::default_payment_methods;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let state = StoreState::new();
//! state.with_store_mut(|store| {
//!     store.login("player@example.com");
//!     store.set_user_identifier("Player#1234");
//!     let id = store.packages()[2].id;
//!     store.select_package(id);
//!     store.select_payment(default_payment_methods().remove(2));
//! });
//!
//! let checkout = Checkout::new(state.clone());
//! let PurchaseOutcome::Completed { total, .. } = checkout.purchase() else {
//!     panic!("cart was complete");
//! };
//! assert_eq!(total.minor(), 305_000);
//! # }
//! ```

pub mod checkout;
pub mod ids;
pub mod state;
pub mod store;

pub use checkout::{Checkout, PurchaseOutcome, SUCCESS_BANNER_DURATION};
pub use state::StoreState;
pub use store::{Store, StoreSnapshot};
