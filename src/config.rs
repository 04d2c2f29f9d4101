//! Runtime configuration
//!
//! Defaults, an optional JSON config file, and validation. Everything here
//! is resolved before any streaming begins; the colorizer itself never sees
//! an invalid flag ordinal or a non-finite frequency.

use serde::{Deserialize, Serialize};

use crate::flag::{self, FlagError};

/// Settings for one colorizing run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Ordinal of the flag to use
    pub flag: usize,
    /// Emit 24-bit RGB escapes instead of 8-bit indexed codes
    pub truecolor: bool,
    /// Gradient change per column
    pub horizontal_frequency: f64,
    /// Gradient change per line
    pub vertical_frequency: f64,
    /// Add a random offset so every run starts elsewhere in the gradient
    pub random: bool,
    /// Colorize even when stdout is not a terminal
    pub force_color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            flag: 0,
            truecolor: false,
            horizontal_frequency: 0.23,
            vertical_frequency: 0.1,
            random: false,
            force_color: false,
        }
    }
}

impl Settings {
    /// Check that the settings describe a runnable configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        flag::by_index(self.flag)?;
        for frequency in [self.horizontal_frequency, self.vertical_frequency] {
            if !frequency.is_finite() {
                return Err(ConfigError::NonFiniteFrequency(frequency));
            }
        }
        Ok(())
    }

    /// Load settings from a file
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&content)?;
        Ok(settings)
    }

    /// Save settings to a file
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load settings from the default location or fall back to defaults
    pub fn load_or_default() -> Self {
        if let Some(config_dir) = dirs_config_path() {
            let config_path = config_dir.join("config.json");
            if config_path.exists() {
                match Self::load(&config_path) {
                    Ok(settings) => return settings,
                    Err(e) => {
                        tracing::warn!("Ignoring unreadable config file: {}", e);
                    },
                }
            }
        }
        Self::default()
    }
}

/// Get the configuration directory path
fn dirs_config_path() -> Option<std::path::PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| std::path::PathBuf::from(home).join(".config").join("prismcat"))
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Flag(#[from] FlagError),

    #[error("frequency must be a finite number, got {0}")]
    NonFiniteFrequency(f64),
}
