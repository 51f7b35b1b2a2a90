//! # Cart Commands
//!
//! Commands behind the cart page and the "Add to Cart" buttons.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐                     │
//! │  │  Empty   │────►│ In Cart  │────►│ Order Placed │──► (3 s) home       │
//! │  │  Cart    │     │          │     │ confirmation │                     │
//! │  └──────────┘     └──────────┘     └──────────────┘                     │
//! │       ▲                │                                                │
//! │       │           add_to_cart          checkout                         │
//! │       │           update_cart_item     (checkout.rs)                    │
//! │       │           remove_from_cart                                      │
//! │       │                │                                                │
//! │       └────────────────┘ last line removed                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tihar_core::{Cart, CartLine, CartTotals, CoreError};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
pub fn get_cart(state: &AppState) -> CartResponse {
    debug!("get_cart command");
    state.cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - Product already in cart: quantity goes up by one
/// - Product not in cart: added as a new line at quantity 1
/// - Product not in the catalog: `NOT_FOUND`, cart untouched
pub fn add_to_cart(state: &AppState, product_id: u32) -> Result<CartResponse, ApiError> {
    debug!(product_id, "add_to_cart command");

    let product = state
        .catalog
        .get(product_id)
        .ok_or(CoreError::ProductNotFound(product_id))?;

    Ok(state.cart.with_cart_mut(|c| {
        c.add(product);
        CartResponse::from(&*c)
    }))
}

/// Sets the quantity of a line.
///
/// ## Behavior
/// - Quantity 0 or less: removes the line
/// - Product not in cart: no change
pub fn update_cart_item(
    state: &AppState,
    product_id: u32,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id, quantity, "update_cart_item command");

    Ok(state.cart.with_cart_mut(|c| {
        c.set_quantity(product_id, quantity);
        CartResponse::from(&*c)
    }))
}

/// Removes a line from the cart. Unknown ids are ignored.
pub fn remove_from_cart(state: &AppState, product_id: u32) -> Result<CartResponse, ApiError> {
    debug!(product_id, "remove_from_cart command");

    Ok(state.cart.with_cart_mut(|c| {
        c.remove(product_id);
        CartResponse::from(&*c)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tihar_core::Money;

    #[test]
    fn test_add_soap_twice_and_sanitizer_once() {
        let state = AppState::default();
        add_to_cart(&state, 1).unwrap();
        add_to_cart(&state, 1).unwrap();
        let cart = add_to_cart(&state, 2).unwrap();

        assert_eq!(cart.totals.total, Money::from_rupees(180));
        assert_eq!(cart.totals.count, 3);
        assert_eq!(cart.totals.line_count, 2);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn test_add_unknown_product_is_not_found() {
        let state = AppState::default();
        let err = add_to_cart(&state, 42).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&state).lines.is_empty());
    }

    #[test]
    fn test_zero_quantity_equals_remove() {
        let a = AppState::default();
        let b = AppState::default();
        for state in [&a, &b] {
            add_to_cart(state, 3).unwrap();
            add_to_cart(state, 5).unwrap();
        }

        let via_update = update_cart_item(&a, 3, 0).unwrap();
        let via_remove = remove_from_cart(&b, 3).unwrap();
        assert_eq!(via_update, via_remove);
        assert_eq!(via_update.totals.total, Money::from_rupees(450));
    }

    #[test]
    fn test_unknown_ids_are_no_ops() {
        let state = AppState::default();
        add_to_cart(&state, 1).unwrap();
        let before = get_cart(&state);

        assert_eq!(update_cart_item(&state, 8, 4).unwrap(), before);
        assert_eq!(remove_from_cart(&state, 8).unwrap(), before);
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let state = AppState::default();
        let cart = add_to_cart(&state, 4).unwrap();
        let json = serde_json::to_value(&cart).unwrap();

        assert_eq!(json["totals"]["lineCount"], 1);
        assert_eq!(json["totals"]["total"], 350);
        assert_eq!(json["lines"][0]["productId"], 4);
    }
}
