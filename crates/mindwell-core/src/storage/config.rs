//! TOML-based application configuration.
//!
//! Stores endpoint URLs and sync preferences:
//! - Result sync backend (REST base URL, enabled flag)
//! - Gamification endpoint
//! - Nutrition analysis endpoint and deadline
//!
//! Configuration is stored at `~/.config/mindwell/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;
use crate::nutrition::DEFAULT_TIMEOUT_SECS;

/// Result sync configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// REST base URL of the result store backend.
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

/// Gamification backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamificationConfig {
    #[serde(default)]
    pub base_url: String,
}

/// Nutrition analysis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionConfig {
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_analysis_timeout")]
    pub timeout_secs: u64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/mindwell/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sync: SyncConfig,
    #[serde(default)]
    pub gamification: GamificationConfig,
    #[serde(default)]
    pub nutrition: NutritionConfig,
}

fn default_true() -> bool {
    true
}
fn default_analysis_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            enabled: true,
        }
    }
}

impl Default for GamificationConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
        }
    }
}

impl Default for NutritionConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or return default.
    ///
    /// A missing file yields the default configuration; a file that
    /// exists but cannot be parsed is an error, never silently replaced.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Persist to disk as pretty TOML.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        self.save_to(&path)
    }

    fn save_to(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }
}
