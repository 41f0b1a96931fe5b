//! Configuration for Bistro
//!
//! Tuning knobs for the containers and the floor-plan graph. Every field has
//! a default, so an empty file and a missing file both yield a working setup.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BUCKET_COUNT, DEFAULT_TABLE_LINK_THRESHOLD};
use crate::types::{Error, Result};
use crate::{log_info, log_warn};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Menu lookup configuration
    #[serde(default)]
    pub menu: MenuConfig,

    /// Floor plan configuration
    #[serde(default)]
    pub floor: FloorConfig,
}

/// Menu lookup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Bucket count of the menu hash table; fixed for the table's lifetime
    #[serde(default = "default_bucket_count")]
    pub bucket_count: usize,
}

/// Floor plan configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorConfig {
    /// Tables closer than this get a direct edge between them
    #[serde(default = "default_table_link_threshold")]
    pub table_link_threshold: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self { bucket_count: default_bucket_count() }
    }
}

impl Default for FloorConfig {
    fn default() -> Self {
        Self { table_link_threshold: default_table_link_threshold() }
    }
}

// Default value functions for serde
fn default_bucket_count() -> usize { DEFAULT_BUCKET_COUNT }
fn default_table_link_threshold() -> f64 { DEFAULT_TABLE_LINK_THRESHOLD }

impl Config {
    /// Reject values the containers cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.menu.bucket_count == 0 {
            return Err(Error::config("menu.bucket_count must be at least 1"));
        }
        let threshold = self.floor.table_link_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(Error::config(format!(
                "floor.table_link_threshold must be a non-negative number, got {}",
                threshold
            )));
        }
        Ok(())
    }
}

/// Load configuration from file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let config_str = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_str)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from file or use defaults
pub fn load_config_or_default(path: Option<&str>) -> Config {
    match path {
        Some(path) => match load_config(path) {
            Ok(config) => {
                log_info!("Loaded configuration from: {}", path);
                config
            }
            Err(e) => {
                log_warn!("Failed to load config from {}: {}. Using defaults.", path, e);
                Config::default()
            }
        },
        None => {
            log_info!("No config file specified, using defaults");
            Config::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.menu.bucket_count, 31);
        assert_eq!(config.floor.table_link_threshold, 50.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let file = write_config("[floor]\ntable_link_threshold = 25.5\n");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.floor.table_link_threshold, 25.5);
        assert_eq!(config.menu.bucket_count, 31);
    }

    #[test]
    fn empty_file_is_default() {
        let file = write_config("");
        assert_eq!(load_config(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn invalid_values_rejected() {
        let file = write_config("[menu]\nbucket_count = 0\n");
        assert!(matches!(load_config(file.path()), Err(Error::Config(_))));

        let file = write_config("[floor]\ntable_link_threshold = -1.0\n");
        assert!(matches!(load_config(file.path()), Err(Error::Config(_))));
    }

    #[test]
    fn parse_and_io_errors() {
        let file = write_config("[menu\n");
        assert!(matches!(load_config(file.path()), Err(Error::ConfigParse(_))));
        assert!(matches!(load_config("/definitely/not/here.toml"), Err(Error::Io(_))));
    }

    #[test]
    fn fallback_on_bad_path() {
        assert_eq!(load_config_or_default(Some("/definitely/not/here.toml")), Config::default());
        assert_eq!(load_config_or_default(None), Config::default());
    }
}
