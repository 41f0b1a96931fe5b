//! Status change records kept for undo

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::order::OrderStatus;

/// Immutable record of one order status transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change {
    /// When the transition happened
    pub timestamp: DateTime<Utc>,
    /// Order the transition applies to
    pub order_id: String,
    /// Status before
    pub previous_status: OrderStatus,
    /// Status after
    pub new_status: OrderStatus,
    /// Human-readable summary
    pub description: String,
}

impl Change {
    /// Record a transition happening now
    pub fn now(order_id: &str, previous_status: OrderStatus, new_status: OrderStatus, description: String) -> Self {
        Self {
            timestamp: Utc::now(),
            order_id: order_id.to_string(),
            previous_status,
            new_status,
            description,
        }
    }
}
