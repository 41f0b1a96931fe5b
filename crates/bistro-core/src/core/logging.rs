//! Logging macros
//!
//! Thin wrappers over `tracing` so the containers and the orchestration
//! layer log through one set of names. Installing a subscriber is left to
//! the binary.

/// Info level logging - general information messages
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        $crate::__tracing::info!($($arg)*);
    }};
}

/// Warning level logging - potentially problematic situations
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        $crate::__tracing::warn!($($arg)*);
    }};
}

/// Error level logging - error conditions
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        $crate::__tracing::error!($($arg)*);
    }};
}

/// Debug level logging - detailed information for debugging
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        $crate::__tracing::debug!($($arg)*);
    }};
}

/// Trace level logging - very detailed tracing information
#[macro_export]
macro_rules! log_trace {
    ($($arg:tt)*) => {{
        $crate::__tracing::trace!($($arg)*);
    }};
}

/// Per-step search tracing for Dijkstra.
///
/// Compiles to nothing unless the `debug-logging` feature is enabled.
#[macro_export]
#[doc(hidden)]
macro_rules! log_search {
    ($($arg:tt)*) => {{
        #[cfg(feature = "debug-logging")]
        $crate::__tracing::trace!(target: "bistro::search", $($arg)*);
    }};
}
