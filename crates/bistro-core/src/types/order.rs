//! Orders and their line items

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Waiting in the pending queue
    Pending,
    /// Being prepared in the kitchen
    InProgress,
    /// Ready at the pass
    Ready,
    /// Delivered to the table
    Served,
    /// Paid and closed
    Completed,
    /// Cancelled before completion
    Cancelled,
}

impl OrderStatus {
    /// Wire name, e.g. `IN_PROGRESS`
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::InProgress => "IN_PROGRESS",
            OrderStatus::Ready => "READY",
            OrderStatus::Served => "SERVED",
            OrderStatus::Completed => "COMPLETED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preparation status of a single line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderItemStatus {
    /// Not started
    Pending,
    /// On the line
    Preparing,
    /// Plated
    Ready,
    /// At the table
    Served,
}

/// One line of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Menu item this line refers to
    pub menu_item_id: String,
    /// Menu item name at the time of ordering
    pub name: String,
    /// Number of portions
    pub quantity: u32,
    /// Unit price at the time of ordering
    pub price: f64,
    /// Preparation status
    pub status: OrderItemStatus,
}

impl OrderItem {
    /// New pending line item
    pub fn new<S: Into<String>>(menu_item_id: S, name: S, quantity: u32, price: f64) -> Self {
        Self {
            menu_item_id: menu_item_id.into(),
            name: name.into(),
            quantity,
            price,
            status: OrderItemStatus::Pending,
        }
    }

    /// Price × quantity
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Caller-supplied draft of an order, before it gets an id and status
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewOrder {
    /// Table the order belongs to
    pub table_number: u32,
    /// Line items
    pub items: Vec<OrderItem>,
    /// Free-form kitchen notes
    pub special_instructions: Option<String>,
}

/// A customer order
///
/// Two orders are equal when their ids are equal. Containers holding copies
/// of an order locate them by identity, even after the status of one copy
/// has moved on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// UUID v4
    pub id: String,
    /// Table the order belongs to
    pub table_number: u32,
    /// Line items
    pub items: Vec<OrderItem>,
    /// Lifecycle status
    pub status: OrderStatus,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last status or assignment change
    pub updated_at: DateTime<Utc>,
    /// Assigned waiter, if any
    pub waiter_id: Option<String>,
    /// Σ price × quantity over the items
    pub total_price: f64,
    /// Free-form kitchen notes
    pub special_instructions: Option<String>,
}

impl Order {
    /// Materialise a draft as a fresh pending order
    pub fn from_draft(draft: NewOrder) -> Self {
        let now = Utc::now();
        let total_price = draft.items.iter().map(OrderItem::line_total).sum();
        Self {
            id: Uuid::new_v4().to_string(),
            table_number: draft.table_number,
            items: draft.items,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
            waiter_id: None,
            total_price,
            special_instructions: draft.special_instructions,
        }
    }

    /// Set the status and bump `updated_at`
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_total_sums_lines() {
        let order = Order::from_draft(NewOrder {
            table_number: 4,
            items: vec![
                OrderItem::new("a", "Tiramisu", 2, 8.5),
                OrderItem::new("b", "Sparkling Water", 3, 4.0),
            ],
            special_instructions: None,
        });
        assert_eq!(order.total_price, 29.0);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.created_at, order.updated_at);
    }

    #[test]
    fn equality_is_by_id() {
        let a = Order::from_draft(NewOrder::default());
        let mut b = a.clone();
        b.set_status(OrderStatus::Served);
        assert_eq!(a, b);
        assert_ne!(a, Order::from_draft(NewOrder::default()));
    }

    #[test]
    fn status_wire_names() {
        assert_eq!(OrderStatus::InProgress.to_string(), "IN_PROGRESS");
        let json = serde_json::to_string(&OrderStatus::InProgress).unwrap();
        assert_eq!(json, "\"IN_PROGRESS\"");
    }
}
