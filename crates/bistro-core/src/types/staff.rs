//! Waiting staff

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A waiter on the rotation
///
/// Equality is by id, so a rotation entry still matches after the waiter's
/// order list has changed elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waiter {
    /// UUID v4
    pub id: String,
    /// Display name
    pub name: String,
    /// Table numbers in this waiter's section
    pub tables: Vec<u32>,
    /// Ids of orders currently assigned
    pub current_orders: Vec<String>,
}

impl Waiter {
    /// New waiter with a fresh id and no orders
    pub fn new(name: &str, tables: Vec<u32>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            tables,
            current_orders: Vec::new(),
        }
    }
}

impl PartialEq for Waiter {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Waiter {}
