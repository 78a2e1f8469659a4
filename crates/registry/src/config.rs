//! Ledger configuration.
//!
//! Loaded from TOML; every field has a default, so an empty file (or no
//! file at all) yields the standard limits.
//!
//! # Example
//!
//! ```toml
//! [maintenance]
//! pending_task_limit = 10
//! high_priority_threshold = 8
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default cap of the per-asset pending task index.
pub const DEFAULT_PENDING_TASK_LIMIT: usize = 10;

/// Default minimum priority reported as high priority.
pub const DEFAULT_HIGH_PRIORITY_THRESHOLD: u32 = 8;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse ledger config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid ledger config: {0}")]
    Invalid(String),
}

/// Top-level ledger configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LedgerConfig {
    #[serde(default)]
    pub maintenance: MaintenanceConfig,
}

/// `[maintenance]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaintenanceConfig {
    /// How many pending task ids each asset's index keeps.
    #[serde(default = "default_pending_task_limit")]
    pub pending_task_limit: usize,
    /// Tasks at or above this priority are reported as high priority.
    #[serde(default = "default_high_priority_threshold")]
    pub high_priority_threshold: u32,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        MaintenanceConfig {
            pending_task_limit: DEFAULT_PENDING_TASK_LIMIT,
            high_priority_threshold: DEFAULT_HIGH_PRIORITY_THRESHOLD,
        }
    }
}

fn default_pending_task_limit() -> usize {
    DEFAULT_PENDING_TASK_LIMIT
}

fn default_high_priority_threshold() -> u32 {
    DEFAULT_HIGH_PRIORITY_THRESHOLD
}

impl LedgerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: LedgerConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maintenance.pending_task_limit == 0 {
            return Err(ConfigError::Invalid(
                "maintenance.pending_task_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
