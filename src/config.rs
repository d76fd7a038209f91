//! Configuration for conlog
//!
//! The threshold is read once at start-up and never changes afterwards.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::logging::{Severity, DEFAULT_THRESHOLD};

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Most permissive severity that is written: "error", "warning", "debug", "info" or "all"
    #[serde(default = "default_threshold")]
    pub threshold: Severity,
}

fn default_threshold() -> Severity {
    DEFAULT_THRESHOLD
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

impl Config {
    /// Load configuration from the default file, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from `path`, or return default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            tracing::debug!("Loading config from {}", path.display());
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            Self::from_toml_str(&content)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save configuration to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }
}

const APP_DIR: &str = "conlog";
const CONFIG_FILE: &str = "config.toml";

/// Directory holding the config file
///
/// The platform config directory (`~/.config/conlog` on Linux), or `./conlog`
/// when the platform reports none.
pub fn config_dir() -> PathBuf {
    match dirs::config_dir() {
        Some(base) => base.join(APP_DIR),
        None => {
            tracing::warn!("No platform config directory, looking for config in ./{}", APP_DIR);
            PathBuf::from(APP_DIR)
        }
    }
}

/// Path of the config file read by [`Config::load`]
pub fn config_file_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
