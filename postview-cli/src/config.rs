//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the postview.yml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Store snapshot (JSON) to read views from
    #[serde(default)]
    pub snapshot: Option<PathBuf>,

    #[serde(default)]
    pub output: OutputConfig,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit JSON even without --json
    #[serde(default)]
    pub json: bool,

    /// Profile field used to label users in text output
    #[serde(default = "default_profile_label")]
    pub profile_label: String,
}

fn default_profile_label() -> String {
    String::from("username")
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            json: false,
            profile_label: default_profile_label(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_yaml::from_str(&contents)?;

        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Load the config file if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Snapshot path, resolved relative to the config file
    pub fn snapshot_path(&self) -> Option<PathBuf> {
        self.snapshot.as_ref().map(|p| self.resolve_path(p))
    }

    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }

        match self.config_path.as_ref().and_then(|p| p.parent()) {
            Some(parent) => parent.join(path),
            None => path.to_path_buf(),
        }
    }
}
