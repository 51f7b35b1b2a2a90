//! # Order Book
//!
//! Holds the session's orders and applies admin approval decisions.
//!
//! ## Status Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Transition Table                                     │
//! │                                                                         │
//! │  from \ to     Pending     Approved          Rejected                   │
//! │  ─────────     ───────     ────────          ────────                   │
//! │  Pending       Unchanged   Applied           Applied                    │
//! │  Approved      Refused     Unchanged         Terminal:     Refused      │
//! │                                              Reassignable: Applied      │
//! │  Rejected      Refused     Terminal:     Refused           Unchanged    │
//! │                            Reassignable: Applied                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing ever moves back to `Pending`. Whether a decided order may be
//! flipped to the other decision is the [`StatusPolicy`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Order, OrderStatus};

// =============================================================================
// Status Policy
// =============================================================================

/// Decides whether approved/rejected orders can be changed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Approved and rejected are final.
    #[default]
    Terminal,
    /// A decided order can be flipped to the other decision.
    Reassignable,
}

impl StatusPolicy {
    /// Whether an order in `from` may move to `to`.
    pub const fn allows(&self, from: OrderStatus, to: OrderStatus) -> bool {
        match (from, to) {
            (_, OrderStatus::Pending) => false,
            (OrderStatus::Pending, _) => true,
            _ => matches!(self, StatusPolicy::Reassignable),
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusPolicy::Terminal => write!(f, "terminal"),
            StatusPolicy::Reassignable => write!(f, "reassignable"),
        }
    }
}

impl FromStr for StatusPolicy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "terminal" | "final" => Ok(StatusPolicy::Terminal),
            "reassignable" | "flexible" => Ok(StatusPolicy::Reassignable),
            _ => Err(ValidationError::NotAllowed {
                field: "status_policy".to_string(),
                allowed: vec!["terminal".to_string(), "reassignable".to_string()],
            }),
        }
    }
}

// =============================================================================
// Transition Outcome
// =============================================================================

/// What an approve/reject call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Status changed.
    Applied { from: OrderStatus, to: OrderStatus },
    /// Order already had the requested status.
    Unchanged,
    /// The policy does not allow this change; status kept.
    Refused { from: OrderStatus, to: OrderStatus },
    /// No order with that id.
    NotFound,
}

impl Transition {
    /// Whether the order's status changed.
    pub const fn is_applied(&self) -> bool {
        matches!(self, Transition::Applied { .. })
    }

    /// Turns `NotFound` and `Refused` into errors for callers that must
    /// report them to a user.
    pub fn into_result(self, order_id: &str) -> CoreResult<()> {
        match self {
            Transition::Applied { .. } | Transition::Unchanged => Ok(()),
            Transition::NotFound => Err(CoreError::OrderNotFound(order_id.to_string())),
            Transition::Refused { from, to } => Err(CoreError::InvalidStatusTransition {
                order_id: order_id.to_string(),
                from,
                to,
            }),
        }
    }
}

// =============================================================================
// Order Stats
// =============================================================================

/// Counts for the admin statistics tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

// =============================================================================
// Order Book
// =============================================================================

/// All orders of the session, in the order they were seeded.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
    policy: StatusPolicy,
}

impl OrderBook {
    /// Creates an order book over the given orders.
    pub fn new(orders: Vec<Order>, policy: StatusPolicy) -> Self {
        OrderBook { orders, policy }
    }

    /// Approves an order.
    ///
    /// ```rust
    /// use tihar_core::{sample_orders, OrderBook, OrderStatus, StatusPolicy};
    ///
    /// let mut book = OrderBook::new(sample_orders(), StatusPolicy::Terminal);
    /// assert!(book.approve("ORD001").is_applied());
    /// assert_eq!(book.get("ORD001").unwrap().status, OrderStatus::Approved);
    /// ```
    pub fn approve(&mut self, order_id: &str) -> Transition {
        self.transition(order_id, OrderStatus::Approved)
    }

    /// Rejects an order.
    pub fn reject(&mut self, order_id: &str) -> Transition {
        self.transition(order_id, OrderStatus::Rejected)
    }

    /// Orders with the given status, in their original relative order.
    pub fn by_status(&self, status: OrderStatus) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter().filter(move |o| o.status == status)
    }

    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn policy(&self) -> StatusPolicy {
        self.policy
    }

    /// Counts per status.
    pub fn stats(&self) -> OrderStats {
        self.orders
            .iter()
            .fold(OrderStats::default(), |mut stats, order| {
                stats.total += 1;
                match order.status {
                    OrderStatus::Pending => stats.pending += 1,
                    OrderStatus::Approved => stats.approved += 1,
                    OrderStatus::Rejected => stats.rejected += 1,
                }
                stats
            })
    }

    fn transition(&mut self, order_id: &str, to: OrderStatus) -> Transition {
        let policy = self.policy;
        let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
            debug!(order_id, %to, "no such order, ignoring");
            return Transition::NotFound;
        };

        let from = order.status;
        if from == to {
            return Transition::Unchanged;
        }
        if !policy.allows(from, to) {
            debug!(order_id, %from, %to, %policy, "transition refused");
            return Transition::Refused { from, to };
        }

        order.status = to;
        info!(order_id, %from, %to, "order status changed");
        Transition::Applied { from, to }
    }
}
