//! # Cart Store
//!
//! The shopping cart: an ordered list of product lines with quantities.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI Action              Operation                 Cart Change           │
//! │  ─────────              ─────────                 ───────────           │
//! │                                                                         │
//! │  "Add to Cart" ───────► add(&product) ──────────► qty + 1 / new line   │
//! │                                                                         │
//! │  − / + buttons ───────► set_quantity(id, n) ────► qty = n              │
//! │                         (n <= 0 behaves as remove)                      │
//! │                                                                         │
//! │  Trash icon ──────────► remove(id) ─────────────► line dropped         │
//! │                                                                         │
//! │  Header badge ────────► count()                                        │
//! │  Order summary ───────► total()                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of the operations can fail. Unknown product ids are ignored and
//! stock is not enforced here.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;

/// One product in the cart.
///
/// The product's id, name and price are copied in when the line is
/// created. Catalog products never change during a session, so the copy
/// always agrees with the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub product_id: u32,
    pub name: String,
    pub unit_price: Money,
    /// Always >= 1 while the line is in a cart.
    pub quantity: i64,
}

impl CartLine {
    /// Creates a line for a product with the given quantity.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        CartLine {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per product id (adding again increases quantity)
/// - Every line has quantity >= 1 (dropping to zero removes the line)
/// - Lines keep the order in which products were first added
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of a product.
    ///
    /// ```rust
    /// use tihar_core::{sample_products, Cart};
    ///
    /// let products = sample_products();
    /// let mut cart = Cart::new();
    /// cart.add(&products[0]);
    /// cart.add(&products[0]);
    ///
    /// assert_eq!(cart.len(), 1);
    /// assert_eq!(cart.count(), 2);
    /// ```
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.line_mut(product.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }
        self.lines.push(CartLine::from_product(product, 1));
    }

    /// Removes the line for `product_id`. No-op if absent.
    pub fn remove(&mut self, product_id: u32) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Replaces the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: same as [`Cart::remove`]
    /// - product not in cart: no-op
    /// - no upper bound here (input is capped by
    ///   [`validate_quantity_input`](crate::validation::validate_quantity_input)),
    ///   stock is not consulted
    pub fn set_quantity(&mut self, product_id: u32, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id);
            return;
        }
        if let Some(line) = self.line_mut(product_id) {
            line.quantity = quantity;
        }
    }

    /// Sum of `price × quantity` over all lines. Zero for an empty cart.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sum of quantities over all lines (the header badge number).
    pub fn count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for a product, if present.
    pub fn line(&self, product_id: u32) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, product_id: u32) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }
}

/// Cart totals summary for responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct products.
    pub line_count: usize,
    /// Units across all lines.
    pub count: i64,
    pub total: Money,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.len(),
            count: cart.count(),
            total: cart.total(),
        }
    }
}
