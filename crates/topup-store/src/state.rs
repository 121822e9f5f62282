//! # Store Handle
//!
//! The shared handle the view layer holds onto.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. The screens and the checkout flow both need access
//! 2. Only one caller may mutate at a time
//! 3. The deferred banner reset runs on a tokio task
//!
//! In practice there is one logical thread of control (the UI event loop);
//! the lock makes each operation atomic with respect to the deferred reset
//! rather than arbitrating real contention.
//!
//! ## Why Not RwLock?
//! Store operations are quick and most of them write. A RwLock would add
//! complexity with minimal benefit.
//!
//! ## Lifecycle
//! A `StoreState` is explicitly constructed by whoever owns the screen tree
//! and dropped when that tree unmounts. There is no module-level singleton:
//! tests and multiple windows each build their own.

use std::sync::{Arc, Mutex};

use crate::store::Store;

/// Shared, explicitly owned handle to a [`Store`].
#[derive(Debug, Clone)]
pub struct StoreState {
    store: Arc<Mutex<Store>>,
}

impl StoreState {
    /// Creates a handle around a freshly seeded store: anonymous session,
    /// default catalog, empty history.
    pub fn new() -> Self {
        StoreState::from_store(Store::new())
    }

    /// Wraps an existing store, e.g. one built with a custom catalog.
    pub fn from_store(store: Store) -> Self {
        StoreState {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use topup_store::StoreState;
    ///
    /// let state = StoreState::new();
    /// let snapshot = state.with_store(|store| store.snapshot());
    /// assert!(!snapshot.is_logged_in);
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Store) -> R,
    {
        let store = self.store.lock().expect("Store mutex poisoned");
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust
    /// use topup_store::StoreState;
    ///
    /// let state = StoreState::new();
    /// state.with_store_mut(|store| store.login("user@example.com"));
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Store) -> R,
    {
        let mut store = self.store.lock().expect("Store mutex poisoned");
        f(&mut store)
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use topup_core::CartStatus;

    #[test]
    fn test_mutation_is_visible_through_any_clone() {
        let state = StoreState::new();
        let other = state.clone();

        state.with_store_mut(|store| store.set_user_identifier("Player#1234"));

        other.with_store(|store| {
            assert_eq!(store.user_identifier(), "Player#1234");
            assert_eq!(store.cart_status(), CartStatus::Partial);
        });
    }

    #[test]
    fn test_instances_are_independent() {
        let a = StoreState::new();
        let b = StoreState::new();

        a.with_store_mut(|store| store.login("user@example.com"));

        assert!(a.with_store(|store| store.session().is_logged_in));
        assert!(!b.with_store(|store| store.session().is_logged_in));
    }
}
