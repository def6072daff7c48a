// Rust guideline compliant 2026-10-19

//! Configuration management for Turfjes.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file looked up in the root directory.
pub const CONFIG_FILE_NAME: &str = "turfjes.toml";

/// Configuration for Turfjes behavior.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the JSON store files, relative to the root unless
    /// absolute.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Marks removed by a removal reason created without an explicit count.
    #[serde(default = "default_removal_count")]
    pub default_removal_count: u32,

    /// Whether store files are pretty-printed.
    #[serde(default)]
    pub pretty_json: bool,
}

/// Default data directory.
fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

/// Default removal count.
fn default_removal_count() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            default_removal_count: default_removal_count(),
            pretty_json: false,
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<root>/turfjes.toml`
    /// 3. Environment variables with `TURFJES_` prefix
    ///
    /// # Arguments
    ///
    /// * `root` - Directory containing the configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let config_path = root.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `TURFJES_DATA_DIR` - Data directory
    /// - `TURFJES_DEFAULT_REMOVAL_COUNT` - Default removal count (>= 1)
    /// - `TURFJES_PRETTY_JSON` - Pretty-print store files (true/false)
    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(val) = std::env::var("TURFJES_DATA_DIR") {
            self.data_dir = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("TURFJES_DEFAULT_REMOVAL_COUNT") {
            self.default_removal_count = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "TURFJES_DEFAULT_REMOVAL_COUNT must be a positive number".to_string(),
                )
            })?;
        }

        if let Ok(val) = std::env::var("TURFJES_PRETTY_JSON") {
            self.pretty_json = val.parse().map_err(|_| {
                Error::InvalidConfig("TURFJES_PRETTY_JSON must be true or false".to_string())
            })?;
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - data_dir is empty
    /// - default_removal_count is zero
    fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(Error::InvalidConfig(
                "data_dir cannot be empty".to_string(),
            ));
        }

        if self.default_removal_count == 0 {
            return Err(Error::InvalidConfig(
                "default_removal_count must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolves the data directory against `root`.
    pub fn data_path(&self, root: &Path) -> PathBuf {
        if self.data_dir.is_absolute() {
            self.data_dir.clone()
        } else {
            root.join(&self.data_dir)
        }
    }

    /// Saves the configuration to `<root>/turfjes.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, root: &Path) -> Result<()> {
        let config_path = root.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}
