//! # State Module
//!
//! Session state for the storefront.
//!
//! Each concern keeps its own container so a command locks only what it
//! touches. [`AppState`] bundles them and is cheap to clone: delayed tasks
//! take a clone of the container they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                          AppState                               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │        │               │               │               │               │
//! │        ▼               ▼               ▼               ▼               │
//! │  ┌──────────┐   ┌────────────┐  ┌────────────┐  ┌──────────────────┐   │
//! │  │ Catalog  │   │ CartState  │  │ OrderState │  │ NavState         │   │
//! │  │ (Arc,    │   │ Arc<Mutex< │  │ Arc<Mutex< │  │ Arc<Mutex<       │   │
//! │  │  frozen) │   │   Cart>>   │  │ OrderBook>>│  │   Navigator>>    │   │
//! │  └──────────┘   └────────────┘  └────────────┘  └──────────────────┘   │
//! │                                                                         │
//! │  StorefrontConfig: read-only after startup (Arc)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod nav;
mod orders;

pub use cart::CartState;
pub use config::{ConfigError, ConfigResult, StorefrontConfig, DEFAULT_LOG_FILTER};
pub use nav::{Forbidden, NavState, Navigator, Route};
pub use orders::OrderState;

use std::sync::Arc;

use tihar_core::{sample_orders, sample_products, Catalog};

/// Everything a command can reach.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub cart: CartState,
    pub orders: OrderState,
    pub nav: NavState,
    pub config: Arc<StorefrontConfig>,
}

impl AppState {
    /// Fresh session: sample catalog, empty cart, seeded orders, home page.
    pub fn new(config: StorefrontConfig) -> Self {
        AppState {
            catalog: Arc::new(Catalog::new(sample_products())),
            cart: CartState::new(),
            orders: OrderState::new(sample_orders(), config.status_policy),
            nav: NavState::new(config.default_role),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}
