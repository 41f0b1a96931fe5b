//! Bistro - restaurant operations from the command line
//!
//! Thin layer over `bistro-core`: subscriber setup, configuration loading
//! and the operator commands behind the `bistro` binary.
#![warn(missing_docs)]

/// Operator commands (graph dump, path query, menu, lifecycle demo)
pub mod commands;

// Re-export commonly used items for convenience
pub use bistro_core::{Config, Error, Restaurant, Result};

use tracing_subscriber::EnvFilter;

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Install the global `tracing` subscriber.
///
/// `level` (any `EnvFilter` directive, e.g. `debug` or `bistro_core=trace`)
/// takes precedence over `RUST_LOG`; with neither set only warnings and
/// errors are shown. Output goes to stderr so command output on stdout stays
/// machine-readable.
pub fn init_tracing(level: Option<&str>) -> anyhow::Result<()> {
    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))?;

    tracing::debug!("Initialized {} v{}", NAME, VERSION);
    Ok(())
}
