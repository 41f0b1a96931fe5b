//! Error types for Bistro
//!
//! Containers never fail on lookups: absence is an ordinary `None` or
//! `false`. The variants here cover what sits around them: configuration,
//! seeding and lifecycle transitions addressed by id.

use thiserror::Error;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Bistro
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed
    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// No order with this id is in the stage the transition expects
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Waiter rotation is empty
    #[error("No waiters on shift")]
    NoWaitersOnShift,

    /// Graph operation errors
    #[error("Graph operation error: {0}")]
    Graph(#[from] GraphError),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Graph operation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// Edge weight is negative, NaN or infinite
    #[error("Invalid weight {weight} for edge {from} <-> {to}")]
    InvalidWeight {
        /// First endpoint
        from: String,
        /// Second endpoint
        to: String,
        /// Rejected weight
        weight: f64,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Create an order-not-found error
    pub fn order_not_found<S: Into<String>>(id: S) -> Self {
        Error::OrderNotFound(id.into())
    }
}
