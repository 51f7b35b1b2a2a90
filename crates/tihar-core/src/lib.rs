//! # tihar-core: Pure Business Logic for the Tihar Connect Storefront
//!
//! This crate holds the storefront's state reducers and rules as plain
//! data structures with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Tihar Connect Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 UI events (event shell / views)                 │   │
//! │  │    Products ──► Cart ──► Checkout      Donate      Admin        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            tihar-storefront (commands + AppState)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tihar-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐  │   │
//! │  │   │ catalog │ │  cart   │ │ orders  │ │ donation │ │ money  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO GLOBAL STATE                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Order, statuses, roles)
//! - [`money`] - Whole-rupee money type
//! - [`cart`] - Cart store
//! - [`orders`] - Order book and status policy
//! - [`catalog`] - Product list and search
//! - [`donation`] - Donation programs and form rules
//! - [`validation`] - Parsing and checking user input
//! - [`seed`] - Sample products and orders
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use tihar_core::{sample_products, Cart, Money};
//!
//! let products = sample_products();
//! let mut cart = Cart::new();
//!
//! cart.add(&products[0]); // soap, ₹50
//! cart.add(&products[0]);
//! cart.add(&products[1]); // sanitizer, ₹80
//!
//! assert_eq!(cart.total(), Money::from_rupees(180));
//! assert_eq!(cart.count(), 3);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod donation;
pub mod error;
pub mod money;
pub mod orders;
pub mod seed;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::{Catalog, CategoryFilter, ProductFilter};
pub use donation::{Donation, DonationForm, DonationProgram, ProgramInfo};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use orders::{OrderBook, OrderStats, StatusPolicy, Transition};
pub use seed::{sample_orders, sample_products};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest donation the form accepts.
pub const MIN_DONATION: Money = Money::from_rupees(100);

/// Quick-pick amounts shown under the donation field.
pub const DONATION_PRESETS: [Money; 4] = [
    Money::from_rupees(500),
    Money::from_rupees(1000),
    Money::from_rupees(5000),
    Money::from_rupees(10000),
];

/// Number of products on the home page's featured row.
pub const FEATURED_PRODUCTS: usize = 4;

/// Longest accepted search query, in characters.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;

/// Largest quantity the cart's quantity control accepts for one line.
/// Guards against typos like 1000 for 10.
pub const MAX_ITEM_QUANTITY: i64 = 999;
