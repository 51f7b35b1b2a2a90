//! # Cart State
//!
//! Holds the session's shopping cart.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because commands and delayed
//! tasks share it. Every operation is a short critical section.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  UI Action                Command                 Cart Change           │
//! │  ─────────                ───────                 ───────────           │
//! │                                                                         │
//! │  "Add to Cart" ──────────► add_to_cart() ───────► Cart::add            │
//! │                                                                         │
//! │  Quantity -/+ ───────────► update_cart_item() ──► Cart::set_quantity   │
//! │                                                                         │
//! │  Remove ─────────────────► remove_from_cart() ──► Cart::remove         │
//! │                                                                         │
//! │  View Cart ──────────────► get_cart() ──────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use tihar_core::Cart;

/// Shared cart state.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// A poisoned lock is recovered: the cart has no invariant a panic
    /// half-way through a mutation could break.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.cart.lock().unwrap_or_else(|e| e.into_inner());
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.cart.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tihar_core::{sample_products, Money};

    #[test]
    fn test_clones_share_one_cart() {
        let products = sample_products();
        let state = CartState::new();
        let other = state.clone();

        state.with_cart_mut(|c| c.add(&products[0]));
        other.with_cart_mut(|c| c.add(&products[0]));

        assert_eq!(state.with_cart(|c| c.count()), 2);
        assert_eq!(other.with_cart(|c| c.total()), Money::from_rupees(100));
    }
}
