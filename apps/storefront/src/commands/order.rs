//! # Order Commands
//!
//! The admin dashboard: pending orders, approve/reject buttons, statistics.
//!
//! ## Dashboard
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Admin Dashboard (Pending: 2)                                           │
//! │                                                                         │
//! │  [Pending Orders] [Approved] [Products] [Statistics]                    │
//! │  ┌───────────────────────────────────────────────────────────────────┐  │
//! │  │ ORD001  Rajesh Kumar   Natural Handmade Soap x5   ₹250            │  │
//! │  │                                      [✓ Approve]  [✗ Reject]      │  │
//! │  └───────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Every command here requires the admin role (FORBIDDEN otherwise).      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tihar_core::validation::validate_order_id;
use tihar_core::{CoreError, Order, OrderBook, OrderStats, OrderStatus, Transition};
use tracing::debug;

use crate::commands::product::ProductDto;
use crate::error::ApiError;
use crate::state::{AppState, Forbidden, Route};

fn require_admin(state: &AppState) -> Result<(), Forbidden> {
    let role = state.nav.with_nav(|n| n.role());
    if role.can_manage_orders() {
        Ok(())
    } else {
        Err(Forbidden {
            route: Route::Admin,
            role,
        })
    }
}

/// Lists orders, optionally only those with one status.
pub fn list_orders(state: &AppState, status: Option<&str>) -> Result<Vec<Order>, ApiError> {
    require_admin(state)?;
    let status: Option<OrderStatus> = status.map(str::parse).transpose()?;

    debug!(?status, "list_orders command");

    Ok(state.orders.with_book(|b| match status {
        Some(s) => b.by_status(s).cloned().collect(),
        None => b.orders().to_vec(),
    }))
}

/// Approves an order.
///
/// ## Returns
/// The order after the call. Approving an approved order is accepted and
/// changes nothing; a rejected order stays rejected unless the store runs
/// the reassignable status policy (`BUSINESS_LOGIC` error).
pub fn approve_order(state: &AppState, order_id: &str) -> Result<Order, ApiError> {
    transition(state, order_id, OrderBook::approve)
}

/// Rejects an order. Mirrors [`approve_order`].
pub fn reject_order(state: &AppState, order_id: &str) -> Result<Order, ApiError> {
    transition(state, order_id, OrderBook::reject)
}

fn transition(
    state: &AppState,
    order_id: &str,
    apply: fn(&mut OrderBook, &str) -> Transition,
) -> Result<Order, ApiError> {
    require_admin(state)?;
    let order_id = validate_order_id(order_id)?;

    debug!(order_id = %order_id, "order transition command");

    let order = state.orders.with_book_mut(|b| -> Result<Order, CoreError> {
        apply(b, &order_id).into_result(&order_id)?;
        b.get(&order_id)
            .cloned()
            .ok_or_else(|| CoreError::OrderNotFound(order_id.clone()))
    })?;

    Ok(order)
}

/// Counts for the statistics tab.
pub fn order_stats(state: &AppState) -> Result<OrderStats, ApiError> {
    require_admin(state)?;
    Ok(state.orders.with_book(|b| b.stats()))
}

/// The products tab: every catalog product with its stock.
pub fn inventory(state: &AppState) -> Result<Vec<ProductDto>, ApiError> {
    require_admin(state)?;
    Ok(state.catalog.products().iter().map(ProductDto::from).collect())
}
