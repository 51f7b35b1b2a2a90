//! # Commands Module
//!
//! Everything a view can ask the backend to do.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Catalog listing and search
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── checkout.rs  ◄─── Mock order placement
//! ├── order.rs     ◄─── Admin order approval
//! ├── donation.rs  ◄─── Donation programs and submission
//! └── nav.rs       ◄─── Routes, roles, session header
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Event shell: "add 3"                                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn add_to_cart(                                                        │
//! │      state: &AppState,     ◄── Session state, passed by reference       │
//! │      product_id: u32,      ◄── Parsed from the line                     │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (serde_json)                                                  │
//! │         ▼                                                               │
//! │  { "lines": [...], "totals": { "lineCount": 1, ... } }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands are plain synchronous functions. `checkout` and
//! `submit_donation` spawn delayed tasks, so they must run inside a tokio
//! runtime.

pub mod cart;
pub mod checkout;
pub mod donation;
pub mod nav;
pub mod order;
pub mod product;
