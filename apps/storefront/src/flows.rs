//! # Mock Checkout and Donation Flows
//!
//! Neither flow moves money. Each shows a confirmation and schedules a
//! delayed task owned by the view it happened on.
//!
//! ## Timeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  t=0   checkout()                                                       │
//! │        ├── cart empty?  → CoreError::EmptyCart                          │
//! │        ├── route = /cart, placed = confirmation                         │
//! │        └── DelayedTask(3 s) ──┐                                         │
//! │                               │                                         │
//! │  t<3   navigate("/products")  │ task aborted, generation bumped         │
//! │                               ▼                                         │
//! │  t=3   (if still on the view) route = /                                 │
//! │                                                                         │
//! │  Donations follow the same shape: the thank-you clears after 3 s,       │
//! │  unless the user left /donate first.                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is not cleared by checkout and no order is appended to the
//! order book.

use serde::Serialize;
use std::time::Duration;
use tihar_core::{CartTotals, CoreError, CoreResult, DonationForm, DonationProgram, Money};
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::state::AppState;

// =============================================================================
// Delayed Task
// =============================================================================

/// A one-shot action run after a delay on the tokio runtime.
///
/// Aborted by [`DelayedTask::cancel`] or when dropped, so whoever holds it
/// decides how long it may live.
#[derive(Debug)]
pub struct DelayedTask {
    handle: JoinHandle<()>,
}

impl DelayedTask {
    /// Spawns `action` to run after `delay`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn<F>(delay: Duration, action: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        });
        DelayedTask { handle }
    }

    pub fn cancel(self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// =============================================================================
// Checkout
// =============================================================================

/// Shown on the cart page after "Place Order".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfirmation {
    pub reference: Uuid,
    pub line_count: usize,
    pub count: i64,
    pub total: Money,
    pub redirect_in_secs: u64,
}

/// Places the mock order and schedules the redirect home.
pub fn place_order(state: &AppState) -> CoreResult<CheckoutConfirmation> {
    let totals = state.cart.with_cart(|c| CartTotals::from(c));
    if totals.line_count == 0 {
        return Err(CoreError::EmptyCart);
    }

    let delay = state.config.checkout_redirect();
    let confirmation = CheckoutConfirmation {
        reference: Uuid::new_v4(),
        line_count: totals.line_count,
        count: totals.count,
        total: totals.total,
        redirect_in_secs: delay.as_secs(),
    };

    let nav = state.nav.clone();
    state.nav.with_nav_mut(|n| {
        let generation = n.show_checkout(confirmation.clone());
        n.hold(DelayedTask::spawn(delay, move || {
            let applied = nav.with_nav_mut(|n| n.finish_checkout(generation));
            debug!(generation, applied, "Checkout redirect fired");
        }));
    });

    info!(
        reference = %confirmation.reference,
        total = %confirmation.total,
        items = confirmation.count,
        "Order placed"
    );
    Ok(confirmation)
}

// =============================================================================
// Donation
// =============================================================================

/// Thank-you shown on the donate page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationReceipt {
    pub reference: Uuid,
    pub program: DonationProgram,
    pub program_name: String,
    pub amount: Money,
    pub reset_in_secs: u64,
}

/// Validates the form, shows the thank-you, and schedules its reset.
pub fn submit_donation(state: &AppState, form: &DonationForm) -> CoreResult<DonationReceipt> {
    let donation = form.validate(state.config.min_donation())?;

    let delay = state.config.donation_reset();
    let receipt = DonationReceipt {
        reference: Uuid::new_v4(),
        program: donation.program,
        program_name: donation.program.name().to_string(),
        amount: donation.amount,
        reset_in_secs: delay.as_secs(),
    };

    let nav = state.nav.clone();
    state.nav.with_nav_mut(|n| {
        let generation = n.show_donation(receipt.clone());
        n.hold(DelayedTask::spawn(delay, move || {
            let applied = nav.with_nav_mut(|n| n.finish_donation(generation));
            debug!(generation, applied, "Donation reset fired");
        }));
    });

    info!(
        reference = %receipt.reference,
        program = %receipt.program,
        amount = %receipt.amount,
        "Donation received"
    );
    Ok(receipt)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Route, StorefrontConfig};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tihar_core::Role;

    fn state_with_cart() -> AppState {
        let state = AppState::default();
        let soap = state.catalog.get(1).cloned().unwrap();
        state.cart.with_cart_mut(|c| {
            c.add(&soap);
            c.add(&soap);
        });
        state
    }

    fn route(state: &AppState) -> Route {
        state.nav.with_nav(|n| n.route())
    }

    #[tokio::test(start_paused = true)]
    async fn test_delayed_task_runs_after_delay() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let task = DelayedTask::spawn(Duration::from_secs(2), move || {
            flag.store(true, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert!(!fired.load(Ordering::SeqCst));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert!(fired.load(Ordering::SeqCst));
        assert!(task.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_task_never_runs() {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = fired.clone();
        let task = DelayedTask::spawn(Duration::from_secs(1), move || {
            flag.store(true, Ordering::SeqCst);
        });
        task.cancel();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_checkout_redirects_home_after_delay() {
        let state = state_with_cart();

        let confirmation = place_order(&state).unwrap();
        assert_eq!(confirmation.total, Money::from_rupees(100));
        assert_eq!(confirmation.count, 2);
        assert_eq!(route(&state), Route::Cart);

        tokio::time::sleep(Duration::from_millis(2999)).await;
        assert_eq!(route(&state), Route::Cart);
        assert!(state.nav.with_nav(|n| n.placed().is_some()));

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(route(&state), Route::Home);
        assert!(state.nav.with_nav(|n| n.placed().is_none()));

        // Mock checkout leaves the cart and the order book alone
        assert_eq!(state.cart.with_cart(|c| c.count()), 2);
        assert_eq!(state.orders.with_book(|b| b.len()), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigating_away_cancels_redirect() {
        let state = state_with_cart();
        place_order(&state).unwrap();

        tokio::time::sleep(Duration::from_secs(1)).await;
        state
            .nav
            .with_nav_mut(|n| n.navigate(Route::Products))
            .unwrap();
        assert!(!state.nav.with_nav(|n| n.has_pending_task()));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(route(&state), Route::Products);
    }

    #[tokio::test]
    async fn test_empty_cart_checkout_is_rejected() {
        let state = AppState::default();
        assert!(matches!(place_order(&state), Err(CoreError::EmptyCart)));
        assert_eq!(route(&state), Route::Home);
    }

    #[tokio::test(start_paused = true)]
    async fn test_donation_thank_you_resets_after_delay() {
        let state = AppState::default();
        let form = DonationForm::new(DonationProgram::Education, "1000");

        let receipt = submit_donation(&state, &form).unwrap();
        assert_eq!(receipt.amount, Money::from_rupees(1000));
        assert_eq!(receipt.program_name, "Educational Programs");
        assert_eq!(route(&state), Route::Donate);

        tokio::time::sleep(Duration::from_millis(3001)).await;
        assert!(state.nav.with_nav(|n| n.donated().is_none()));
        assert_eq!(route(&state), Route::Donate);
    }

    #[tokio::test(start_paused = true)]
    async fn test_leaving_donate_cancels_reset() {
        let state = AppState::default();
        let form = DonationForm::new(DonationProgram::General, "500");
        submit_donation(&state, &form).unwrap();

        state.nav.with_nav_mut(|n| n.navigate(Route::About)).unwrap();
        let generation = state.nav.with_nav(|n| n.generation());

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(route(&state), Route::About);
        assert_eq!(state.nav.with_nav(|n| n.generation()), generation);
    }

    #[tokio::test]
    async fn test_donation_validation() {
        let state = AppState::default();
        for amount in ["", "abc", "99"] {
            let form = DonationForm::new(DonationProgram::Skill, amount);
            assert!(matches!(
                submit_donation(&state, &form),
                Err(CoreError::Validation(_))
            ));
        }
        assert!(state.nav.with_nav(|n| n.donated().is_none()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_configured_delay_and_minimum() {
        let config = StorefrontConfig {
            donation_reset_secs: 10,
            min_donation: 1000,
            default_role: Role::Ngo,
            ..Default::default()
        };
        let state = AppState::new(config);

        let small = DonationForm::new(DonationProgram::Skill, "500");
        assert!(submit_donation(&state, &small).is_err());

        let form = DonationForm::new(DonationProgram::Skill, "5000");
        let receipt = submit_donation(&state, &form).unwrap();
        assert_eq!(receipt.reset_in_secs, 10);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(state.nav.with_nav(|n| n.donated().is_some()));

        tokio::time::sleep(Duration::from_secs(6)).await;
        assert!(state.nav.with_nav(|n| n.donated().is_none()));
    }
}
