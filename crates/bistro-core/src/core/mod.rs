//! Core application logic and configuration

/// Logging macros
pub mod logging;

/// Application configuration
pub mod config;

/// Restaurant state and order lifecycle
pub mod restaurant;

/// Factory pattern for restaurant creation
pub mod factory;

// Re-export commonly used items
pub use config::{load_config, load_config_or_default, Config, FloorConfig, MenuConfig};
pub use factory::{build_restaurant, connect_floor, create_restaurant};
pub use restaurant::Restaurant;
