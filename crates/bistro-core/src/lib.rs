//! # Bistro Core
//!
//! Containers, pathfinding and order lifecycle for the Bistro restaurant
//! operations system. Everything here is synchronous, in-process and
//! single-owner: each container is a plain value mutated through `&mut self`.

#![warn(missing_docs)]

/// Orchestration, configuration and logging
pub mod core;

/// Hand-built container types and the floor-plan graph
pub mod structures;

/// Domain entities and error types
pub mod types;

/// System constants
pub mod constants;

/// Default catalog used to seed a fresh restaurant
pub mod seed;

#[doc(hidden)]
pub use tracing as __tracing;

// Re-export commonly used items
pub use crate::core::{create_restaurant, load_config, load_config_or_default, Config, Restaurant};
pub use seed::Catalog;
pub use structures::{
    BinaryTree, CircularList, DoublyLinkedList, Graph, HashTable, LinkedList, NodeHandle,
    PathResult, Queue, SortedTree, Stack,
};
pub use types::{Error, Result};
pub use types::{Change, Location, MenuItem, NewOrder, Order, OrderItem, OrderStatus, Waiter};
