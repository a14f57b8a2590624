use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/spindle/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("spindle").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error: the built-in defaults (including the
    /// sample review set) are returned instead.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Review ratings are within 1..=5
    /// - Timer periods and the cell width are non-zero
    ///
    /// An empty review list is allowed; the carousel simply never activates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for review in &self.reviews {
            if review.rating == 0 || review.rating > 5 {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "Review by '{}' has rating {}, expected 1 through 5",
                        review.author, review.rating
                    ),
                });
            }
        }

        if self.carousel.auto_advance_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "auto_advance_ms must be greater than zero".to_string(),
            });
        }

        if self.carousel.drag_threshold_px <= 0 {
            return Err(ConfigError::ValidationError {
                message: "drag_threshold_px must be greater than zero".to_string(),
            });
        }

        if self.terminal.cell_width_px == 0 {
            return Err(ConfigError::ValidationError {
                message: "cell_width_px must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
