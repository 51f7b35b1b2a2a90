//! # Navigation Commands
//!
//! Header links, the role switcher, and the header badges.

use serde::Serialize;
use tihar_core::Role;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::flows::{CheckoutConfirmation, DonationReceipt};
use crate::state::{AppState, Route};

/// Everything the header and the current view's banner show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub store_name: String,
    pub currency_symbol: String,
    pub route: Route,
    pub role: Role,
    /// Cart badge: units across all lines.
    pub cart_count: i64,
    /// Admin tab label: "Admin Dashboard (Pending: n)".
    pub pending_orders: usize,
    pub placed: Option<CheckoutConfirmation>,
    pub donated: Option<DonationReceipt>,
}

/// Current session header.
pub fn session(state: &AppState) -> SessionView {
    let cart_count = state.cart.with_cart(|c| c.count());
    let pending_orders = state.orders.with_book(|b| b.stats().pending);

    state.nav.with_nav(|n| SessionView {
        store_name: state.config.store_name.clone(),
        currency_symbol: state.config.currency_symbol.clone(),
        route: n.route(),
        role: n.role(),
        cart_count,
        pending_orders,
        placed: n.placed().cloned(),
        donated: n.donated().cloned(),
    })
}

/// Follows a link. `/admin` requires the admin role.
pub fn navigate(state: &AppState, path: &str) -> Result<SessionView, ApiError> {
    let route: Route = path.parse()?;
    debug!(%route, "navigate command");

    state.nav.with_nav_mut(|n| n.navigate(route))?;
    Ok(session(state))
}

/// Switches the role from the header's selector.
pub fn set_role(state: &AppState, role: &str) -> Result<SessionView, ApiError> {
    let role: Role = role.parse()?;
    info!(%role, "Role switched");

    state.nav.with_nav_mut(|n| n.set_role(role));
    Ok(session(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::cart::add_to_cart;
    use crate::error::ErrorCode;

    #[test]
    fn test_session_badges() {
        let state = AppState::default();
        add_to_cart(&state, 1).unwrap();
        add_to_cart(&state, 1).unwrap();

        let view = session(&state);
        assert_eq!(view.route, Route::Home);
        assert_eq!(view.role, Role::Customer);
        assert_eq!(view.cart_count, 2);
        assert_eq!(view.pending_orders, 2);
    }

    #[test]
    fn test_navigate() {
        let state = AppState::default();
        assert_eq!(navigate(&state, "/donate").unwrap().route, Route::Donate);

        let err = navigate(&state, "/admin").unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(session(&state).route, Route::Donate);

        let err = navigate(&state, "/nowhere").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_role_switch_leaves_dashboard() {
        let state = AppState::default();
        set_role(&state, "admin").unwrap();
        assert_eq!(navigate(&state, "/admin").unwrap().route, Route::Admin);

        let view = set_role(&state, "customer").unwrap();
        assert_eq!(view.route, Route::Home);
        assert!(set_role(&state, "warden").is_err());
    }

    #[test]
    fn test_session_serializes_route_as_path() {
        let state = AppState::default();
        let json = serde_json::to_value(session(&state)).unwrap();
        assert_eq!(json["route"], "/");
        assert_eq!(json["role"], "customer");
        assert_eq!(json["storeName"], "Tihar Connect");
    }
}
