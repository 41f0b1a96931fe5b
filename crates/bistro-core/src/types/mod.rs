/// Type definitions for the Bistro system
///
/// Domain entities flowing through the containers, plus error types.

/// System-wide error types
pub mod error;
/// Orders and line items
pub mod order;
/// Menu items
pub mod menu;
/// Waiting staff
pub mod staff;
/// Tables and walkable locations
pub mod floor;
/// Status change records
pub mod change;

// Re-export commonly used types for convenience
pub use error::{Error, GraphError, Result};
pub use order::{NewOrder, Order, OrderItem, OrderItemStatus, OrderStatus};
pub use menu::{by_category_then_name, MenuItem, MenuOrder};
pub use staff::Waiter;
pub use floor::{Location, LocationKind, RestaurantTable, TableStatus};
pub use change::Change;
