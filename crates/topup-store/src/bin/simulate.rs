//! # Storefront Walkthrough
//!
//! Runs the full purchase flow against a fresh store, logging every step.
//! Useful for eyeballing store behavior without a frontend attached.
//!
//! ## Usage
//! ```bash
//! cargo run -p topup-store --bin simulate
//!
//! # With store operation logs
//! RUST_LOG=debug cargo run -p topup-store --bin simulate
//! ```

use std::time::Duration;

use tracing::info;
use tracing_subscriber::EnvFilter;

use topup_core::format::{format_timestamp, Currency};
use topup_core::default_payment_methods;
use topup_store::{Checkout, PurchaseOutcome, StoreState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let state = StoreState::new();
    // Short banner so the walkthrough doesn't sit on the timer
    let checkout = Checkout::with_banner_duration(state.clone(), Duration::from_millis(300));

    // Browse the catalog
    state.with_store(|store| {
        info!("catalog:");
        for package in store.packages() {
            let badge = if package.is_popular { " [HOT]" } else { "" };
            info!(
                "  {} VP (+{} bonus) - {}{}",
                package.vp_amount,
                package.bonus_vp,
                Currency::Rupiah.format(package.price()),
                badge
            );
        }
    });

    // Log in and fill the cart
    state.with_store_mut(|store| {
        store.login("player@example.com");
        store.set_user_identifier("Player#1234");
        let id = store.packages()[2].id;
        store.select_package(id);
        store.select_payment(default_payment_methods().remove(2));
    });

    let total = state.with_store(|store| store.cart_total());
    info!("order total: {}", Currency::Rupiah.format(total));

    // Buy
    match checkout.purchase() {
        PurchaseOutcome::Completed { transaction, .. } => {
            if let Some(tx) = transaction {
                info!(
                    "purchase recorded: {} VP via {} at {}",
                    tx.vp_amount,
                    tx.payment_method_name,
                    format_timestamp(tx.created_at)
                );
            }
        }
        PurchaseOutcome::NotReady => unreachable!("cart was complete"),
    }

    // Let the success banner elapse so the deferred reset fires
    tokio::time::sleep(Duration::from_millis(400)).await;

    state.with_store(|store| {
        info!(
            "after banner: cart {:?}, {} transaction(s) in history",
            store.cart_status(),
            store.transactions().len()
        );
        for tx in store.transactions_for("player@example.com") {
            info!(
                "  {} - {} VP - {}",
                format_timestamp(tx.created_at),
                tx.vp_amount,
                Currency::Rupiah.format(tx.total_price())
            );
        }
    });
}
