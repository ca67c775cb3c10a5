//! Vela configuration

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use vela_tabs::TabsOptions;

use crate::error::CoreError;
use crate::Result;

pub(crate) const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Defaults for every tabs region
    pub tabs: TabsOptions,
}

impl Config {
    /// Load from a JSON file; a missing file yields the defaults.
    ///
    /// Runs before logging is set up, so it does not log; callers report
    /// the outcome once the subscriber is installed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.tabs.role.trim().is_empty() {
            return Err(CoreError::Config("tabs.role cannot be empty".to_string()));
        }
        if self.log_filter.trim().is_empty() {
            return Err(CoreError::Config("log_filter cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Per-user config directory, `.vela` when no home directory is known
    pub fn data_dir() -> PathBuf {
        ProjectDirs::from("", "", "vela")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".vela"))
    }

    pub fn default_path() -> PathBuf {
        Self::data_dir().join("config.json")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            tabs: TabsOptions::default(),
        }
    }
}
