//! # Checkout Command
//!
//! "Place Order" on the cart page. See [`crate::flows`] for the redirect.

use tracing::debug;

use crate::error::ApiError;
use crate::flows::{self, CheckoutConfirmation};
use crate::state::AppState;

/// Places the mock order.
///
/// ## Returns
/// The confirmation now shown on the cart page. The session returns to the
/// home page once `redirectInSecs` have passed, unless the user navigates
/// first. An empty cart is a `CART_ERROR`.
pub fn checkout(state: &AppState) -> Result<CheckoutConfirmation, ApiError> {
    debug!("checkout command");
    Ok(flows::place_order(state)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::error::ErrorCode;
    use crate::state::Route;
    use tihar_core::Money;

    #[tokio::test]
    async fn test_checkout_shows_confirmation_on_cart_page() {
        let state = AppState::default();
        add_to_cart(&state, 6).unwrap();

        let confirmation = checkout(&state).unwrap();
        assert_eq!(confirmation.total, Money::from_rupees(2500));
        assert_eq!(confirmation.redirect_in_secs, 3);

        state.nav.with_nav(|n| {
            assert_eq!(n.route(), Route::Cart);
            assert_eq!(n.placed(), Some(&confirmation));
        });
    }

    #[tokio::test]
    async fn test_checkout_empty_cart() {
        let state = AppState::default();
        let err = checkout(&state).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }
}
