// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! DAL configuration
//!
//! Loaded from TOML. Every key is optional:
//!
//! ```toml
//! default_launch_mode = "create_only"
//! event_queue_depth = 20
//! ```

use crate::event::LaunchMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default number of events an `EventQueue` holds before refusing more
pub const DEFAULT_EVENT_QUEUE_DEPTH: usize = 10;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DalConfig {
    /// Launch mode used by `Event::with_default_mode`
    pub default_launch_mode: LaunchMode,
    /// Maximum number of events held by a queue
    pub event_queue_depth: usize,
}

impl Default for DalConfig {
    fn default() -> Self {
        Self {
            default_launch_mode: LaunchMode::CreateAndFire,
            event_queue_depth: DEFAULT_EVENT_QUEUE_DEPTH,
        }
    }
}

impl DalConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            launch_mode = ?config.default_launch_mode,
            queue_depth = config.event_queue_depth,
            "loaded config"
        );
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
