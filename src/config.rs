//! User configuration and preferences

use crate::domain::planner::DEFAULT_WIDTH;
use crate::domain::SortKey;
use crate::error::{RenumError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Prefix used for the last successful rename
    pub prefix: String,
    /// Preferred sort order
    pub sort_key: SortKey,
    /// Digits in the sequence number
    pub width: usize,
    /// Whether dotfiles are part of the batch
    pub include_hidden: bool,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            sort_key: SortKey::default(),
            width: DEFAULT_WIDTH,
            include_hidden: true,
        }
    }
}

impl UserConfig {
    /// Get the config file path (~/.config/renum/config.json)
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("renum").join("config.json"))
    }

    /// Load config from file, or create default if doesn't exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path().ok_or_else(|| {
            RenumError::ConfigError("Could not determine config directory".to_string())
        })?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| RenumError::ConfigError(format!("Failed to read config file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| RenumError::ConfigError(format!("Failed to parse config file: {}", e)))
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or_else(|| {
            RenumError::ConfigError("Could not determine config directory".to_string())
        })?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                RenumError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            RenumError::ConfigError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, contents)
            .map_err(|e| RenumError::ConfigError(format!("Failed to write config file: {}", e)))?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }
}
