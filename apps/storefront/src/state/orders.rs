//! # Order State
//!
//! Holds the admin dashboard's order book.

use std::sync::{Arc, Mutex};

use tihar_core::{Order, OrderBook, StatusPolicy};

/// Shared order book.
#[derive(Debug, Clone)]
pub struct OrderState {
    book: Arc<Mutex<OrderBook>>,
}

impl OrderState {
    pub fn new(orders: Vec<Order>, policy: StatusPolicy) -> Self {
        OrderState {
            book: Arc::new(Mutex::new(OrderBook::new(orders, policy))),
        }
    }

    /// Executes a function with read access to the order book.
    pub fn with_book<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderBook) -> R,
    {
        let book = self.book.lock().unwrap_or_else(|e| e.into_inner());
        f(&book)
    }

    /// Executes a function with write access to the order book.
    pub fn with_book_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderBook) -> R,
    {
        let mut book = self.book.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tihar_core::{sample_orders, OrderStatus};

    #[test]
    fn test_mutations_are_visible_to_clones() {
        let state = OrderState::new(sample_orders(), StatusPolicy::Terminal);
        let view = state.clone();

        state.with_book_mut(|b| b.approve("ORD001"));

        let status = view.with_book(|b| b.get("ORD001").map(|o| o.status));
        assert_eq!(status, Some(OrderStatus::Approved));
        assert_eq!(view.with_book(|b| b.stats().pending), 1);
    }
}
