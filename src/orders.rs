//! Orders
//!
//! A placed order carries an immutable snapshot of the cart at
//! placement time together with the charged totals, so later cart
//! edits never alter it. Only its delivery progress mutates over the
//! order's lifetime.

use std::fmt;

use jiff::Timestamp;

use crate::{cart::CartItem, pricing::OrderSummary, progress::OrderProgress};

/// Identity of a placed order, rendered like `ORD00042`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(u32);

impl OrderId {
    /// Create an order id from its sequence number.
    pub fn new(sequence: u32) -> Self {
        OrderId(sequence)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ORD{:05}", self.0)
    }
}

/// A placed order.
#[derive(Debug, Clone)]
pub struct Order {
    id: OrderId,
    items: Vec<CartItem>,
    summary: OrderSummary,
    progress: OrderProgress,
    placed_at: Timestamp,
}

impl Order {
    /// Create an order from a cart snapshot and the summary charged at
    /// placement, with the standard delivery steps started.
    pub fn place(
        id: OrderId,
        items: Vec<CartItem>,
        summary: OrderSummary,
        placed_at: Timestamp,
    ) -> Self {
        Order {
            id,
            items,
            summary,
            progress: OrderProgress::standard(),
            placed_at,
        }
    }

    /// Order identity.
    pub fn id(&self) -> OrderId {
        self.id
    }

    /// The items as they were at placement.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The totals charged at placement.
    pub fn summary(&self) -> &OrderSummary {
        &self.summary
    }

    /// Delivery progress, read-only.
    pub fn progress(&self) -> &OrderProgress {
        &self.progress
    }

    /// Delivery progress, for advancing on status updates.
    pub fn progress_mut(&mut self) -> &mut OrderProgress {
        &mut self.progress
    }

    /// When the order was placed.
    pub fn placed_at(&self) -> Timestamp {
        self.placed_at
    }
}
