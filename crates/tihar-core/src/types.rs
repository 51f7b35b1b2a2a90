//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │     Order       │   │   OrderItem     │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  id ("ORD001")  │   │  name           │       │
//! │  │  name           │   │  customer       │   │  quantity       │       │
//! │  │  category       │   │  items          │   └─────────────────┘       │
//! │  │  price (Money)  │   │  total (Money)  │                             │
//! │  │  unit, stock    │   │  status, date   │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │  OrderStatus    │   │      Role       │       │
//! │  │  PersonalCare   │   │  Pending        │   │  Customer       │       │
//! │  │  DairyProducts  │   │  Approved       │   │  Admin          │       │
//! │  │  Textiles ...   │   │  Rejected       │   │  Ngo            │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable for the whole session. Orders only ever change
//! their `status`, and only through [`crate::orders::OrderBook`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Product category. Serialized with its display name ("Dairy Products").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Category {
    #[serde(rename = "Personal Care")]
    PersonalCare,
    #[serde(rename = "Dairy Products")]
    DairyProducts,
    #[serde(rename = "Textiles")]
    Textiles,
    #[serde(rename = "Furniture")]
    Furniture,
    #[serde(rename = "Food Products")]
    FoodProducts,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Category; 5] = [
        Category::PersonalCare,
        Category::DairyProducts,
        Category::Textiles,
        Category::Furniture,
        Category::FoodProducts,
    ];

    /// Display name as shown on the category filter buttons.
    pub const fn label(&self) -> &'static str {
        match self {
            Category::PersonalCare => "Personal Care",
            Category::DairyProducts => "Dairy Products",
            Category::Textiles => "Textiles",
            Category::Furniture => "Furniture",
            Category::FoodProducts => "Food Products",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepts the display name or a dashed slug, case-insensitively:
/// `"Dairy Products"`, `"dairy-products"`, `"dairy"`.
impl FromStr for Category {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "personal care" | "personal" => Ok(Category::PersonalCare),
            "dairy products" | "dairy" => Ok(Category::DairyProducts),
            "textiles" => Ok(Category::Textiles),
            "furniture" => Ok(Category::Furniture),
            "food products" | "food" => Ok(Category::FoodProducts),
            _ => Err(ValidationError::NotAllowed {
                field: "category".to_string(),
                allowed: Category::ALL.iter().map(|c| c.label().to_string()).collect(),
            }),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product made in one of the prison workshops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: u32,

    /// Display name.
    pub name: String,

    pub category: Category,

    /// Price in whole rupees.
    pub price: Money,

    /// Workshop that makes the product, e.g. "Jail No. 3 - Dairy Unit".
    pub unit: String,

    /// Image URI. Not fetched or validated here.
    pub image: String,

    pub description: String,

    /// Units on hand. Informational; the cart does not enforce it.
    pub stock: u32,
}

impl Product {
    /// Checks whether the requested quantity is covered by stock.
    pub fn in_stock(&self, quantity: i64) -> bool {
        quantity <= i64::from(self.stock)
    }
}

// =============================================================================
// Order Status
// =============================================================================

/// The approval status of an order.
///
/// ```text
///            approve
///   Pending ─────────► Approved
///      │
///      │ reject
///      ▼
///   Rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Waiting for an administrator.
    #[default]
    Pending,
    /// Approved for production.
    Approved,
    /// Turned down.
    Rejected,
}

impl OrderStatus {
    /// Approved and Rejected are terminal.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Approved | OrderStatus::Rejected)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Approved => "approved",
            OrderStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(OrderStatus::Pending),
            "approved" => Ok(OrderStatus::Approved),
            "rejected" => Ok(OrderStatus::Rejected),
            _ => Err(ValidationError::NotAllowed {
                field: "status".to_string(),
                allowed: vec![
                    "pending".to_string(),
                    "approved".to_string(),
                    "rejected".to_string(),
                ],
            }),
        }
    }
}

// =============================================================================
// Order
// =============================================================================

/// One line of an order: what was asked for and how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderItem {
    pub name: String,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        OrderItem {
            name: name.into(),
            quantity,
        }
    }
}

/// A customer's order, tracked through admin approval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Order {
    /// Business identifier, e.g. "ORD001".
    pub id: String,

    pub customer: String,

    /// Items in the order, in the order they were listed.
    pub items: Vec<OrderItem>,

    /// Order total in whole rupees.
    pub total: Money,

    pub status: OrderStatus,

    /// Date the order was placed.
    #[ts(as = "String")]
    pub date: NaiveDate,
}

// =============================================================================
// Role
// =============================================================================

/// Who is using the storefront. Selected from the header's role switcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Customer,
    /// Jail authority; may approve and reject orders.
    Admin,
    Ngo,
}

impl Role {
    /// Only admins may see the admin dashboard or change order status.
    pub const fn can_manage_orders(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Customer => write!(f, "customer"),
            Role::Admin => write!(f, "admin"),
            Role::Ngo => write!(f, "ngo"),
        }
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "customer" => Ok(Role::Customer),
            "admin" => Ok(Role::Admin),
            "ngo" => Ok(Role::Ngo),
            _ => Err(ValidationError::NotAllowed {
                field: "role".to_string(),
                allowed: vec![
                    "customer".to_string(),
                    "admin".to_string(),
                    "ngo".to_string(),
                ],
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
