//! # Navigation State
//!
//! Current route, current role, and the transient state of the view on
//! screen (the checkout confirmation or the donation thank-you).
//!
//! ## View Generations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  generation: 7          generation: 8            generation: 9          │
//! │  ┌────────────┐ checkout ┌────────────┐ navigate ┌────────────┐         │
//! │  │ /cart      │────────► │ /cart      │────────► │ /products  │         │
//! │  │            │          │ placed ✓   │          │            │         │
//! │  └────────────┘          └─────┬──────┘          └────────────┘         │
//! │                                │ redirect task                          │
//! │                                │ (captured generation 8)                │
//! │                                ▼                                        │
//! │                     aborted on navigate; if it ever fires               │
//! │                     late, 8 != 9 and it does nothing                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every view change and every newly scheduled task bumps the generation.
//! A delayed task only applies its effect when the generation it captured
//! is still current.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tihar_core::{Role, ValidationError};
use tracing::debug;

use crate::flows::{CheckoutConfirmation, DelayedTask, DonationReceipt};

// =============================================================================
// Route
// =============================================================================

/// A page of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Route {
    #[default]
    #[serde(rename = "/")]
    Home,
    #[serde(rename = "/products")]
    Products,
    #[serde(rename = "/cart")]
    Cart,
    #[serde(rename = "/donate")]
    Donate,
    #[serde(rename = "/admin")]
    Admin,
    #[serde(rename = "/about")]
    About,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Home,
        Route::Products,
        Route::Cart,
        Route::Donate,
        Route::Admin,
        Route::About,
    ];

    pub const fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Products => "/products",
            Route::Cart => "/cart",
            Route::Donate => "/donate",
            Route::Admin => "/admin",
            Route::About => "/about",
        }
    }

    /// The admin dashboard is the only restricted page.
    pub const fn requires_admin(&self) -> bool {
        matches!(self, Route::Admin)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = ValidationError;

    /// Accepts `/products`, `products`, `/products/` and `/` (or `home`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_matches('/').to_lowercase().as_str() {
            "" | "home" => Ok(Route::Home),
            "products" => Ok(Route::Products),
            "cart" => Ok(Route::Cart),
            "donate" => Ok(Route::Donate),
            "admin" => Ok(Route::Admin),
            "about" => Ok(Route::About),
            _ => Err(ValidationError::NotAllowed {
                field: "route".to_string(),
                allowed: Route::ALL.iter().map(|r| r.path().to_string()).collect(),
            }),
        }
    }
}

/// The current role may not open a page or perform an admin action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{route} is only available to the admin role (current role: {role})")]
pub struct Forbidden {
    pub route: Route,
    pub role: Role,
}

// =============================================================================
// Navigator
// =============================================================================

/// Session navigation and view-local state.
#[derive(Debug)]
pub struct Navigator {
    route: Route,
    role: Role,
    generation: u64,
    placed: Option<CheckoutConfirmation>,
    donated: Option<DonationReceipt>,
    /// Timer owned by the current view; dropping it aborts it.
    pending: Option<DelayedTask>,
}

impl Navigator {
    pub fn new(role: Role) -> Self {
        Navigator {
            route: Route::Home,
            role,
            generation: 0,
            placed: None,
            donated: None,
            pending: None,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Confirmation shown on the cart page after checkout.
    pub fn placed(&self) -> Option<&CheckoutConfirmation> {
        self.placed.as_ref()
    }

    /// Thank-you shown on the donate page after a donation.
    pub fn donated(&self) -> Option<&DonationReceipt> {
        self.donated.as_ref()
    }

    pub fn has_pending_task(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Opens `route`. Opening the page already on screen changes nothing.
    pub fn navigate(&mut self, route: Route) -> Result<(), Forbidden> {
        if route.requires_admin() && !self.role.can_manage_orders() {
            return Err(Forbidden {
                route,
                role: self.role,
            });
        }
        if route != self.route {
            self.enter(route);
        }
        Ok(())
    }

    /// Switches role. Leaving the admin role while on the dashboard sends
    /// the user home.
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
        if self.route.requires_admin() && !role.can_manage_orders() {
            debug!(%role, "Role lost dashboard access, returning home");
            self.enter(Route::Home);
        }
    }

    /// Shows a checkout confirmation on the cart page and returns the
    /// generation the redirect task must carry.
    pub fn show_checkout(&mut self, confirmation: CheckoutConfirmation) -> u64 {
        if self.route != Route::Cart {
            self.enter(Route::Cart);
        }
        self.placed = Some(confirmation);
        self.next_generation()
    }

    /// Shows a donation thank-you and returns the generation the reset
    /// task must carry.
    pub fn show_donation(&mut self, receipt: DonationReceipt) -> u64 {
        if self.route != Route::Donate {
            self.enter(Route::Donate);
        }
        self.donated = Some(receipt);
        self.next_generation()
    }

    /// Hands a delayed task to the current view, replacing (and aborting)
    /// any earlier one.
    pub fn hold(&mut self, task: DelayedTask) {
        self.pending = Some(task);
    }

    /// Redirect after checkout. Returns whether it applied.
    pub fn finish_checkout(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.placed.is_none() {
            return false;
        }
        self.enter(Route::Home);
        true
    }

    /// Clears the donation thank-you. Returns whether it applied.
    pub fn finish_donation(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.donated.is_none() {
            return false;
        }
        self.donated = None;
        true
    }

    fn enter(&mut self, route: Route) {
        self.route = route;
        self.placed = None;
        self.donated = None;
        self.pending = None;
        self.next_generation();
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }
}

/// Shared navigation state.
#[derive(Debug, Clone)]
pub struct NavState {
    nav: Arc<Mutex<Navigator>>,
}

impl NavState {
    pub fn new(role: Role) -> Self {
        NavState {
            nav: Arc::new(Mutex::new(Navigator::new(role))),
        }
    }

    /// Executes a function with read access to the navigator.
    pub fn with_nav<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Navigator) -> R,
    {
        let nav = self.nav.lock().unwrap_or_else(|e| e.into_inner());
        f(&nav)
    }

    /// Executes a function with write access to the navigator.
    pub fn with_nav_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Navigator) -> R,
    {
        let mut nav = self.nav.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut nav)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
