//! Startup configuration
//!
//! Settings come from three layers, later ones winning:
//! built-in defaults, an optional TOML file (`--config`), then CLI flags.
//! Every field has a default, so a partial file such as
//!
//! ```toml
//! algorithm = "merge"
//! ```
//!
//! is valid on its own.

use crate::algorithms::Algorithm;
use crate::playback::Cadence;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(String),

    #[error("speed {0} is outside the supported range 100..=900")]
    InvalidSpeed(u64),

    #[error("unknown algorithm '{0}'")]
    InvalidAlgorithm(String),

    #[error("array must contain at least one number")]
    EmptyArray,
}

/// Validated-on-demand startup settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Algorithm key (`bubble`, `selection`, `insertion`, `merge`, `quick`, `counting`)
    pub algorithm: String,
    /// Initial array on display
    pub array: Vec<i64>,
    /// Displayed speed, 100 (slowest) to 900 (fastest)
    pub speed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: Algorithm::default().key().to_string(),
            array: vec![64, 34, 25, 12, 22, 11, 90],
            speed: Cadence::default().display_speed(),
        }
    }
}

impl Config {
    /// Load from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check every field, returning the parsed algorithm and cadence
    pub fn validate(&self) -> Result<(Algorithm, Cadence), ConfigError> {
        let algorithm = self
            .algorithm
            .parse::<Algorithm>()
            .map_err(|e| ConfigError::InvalidAlgorithm(e.0))?;
        let cadence =
            Cadence::from_display_speed(self.speed).map_err(|_| ConfigError::InvalidSpeed(self.speed))?;
        if self.array.is_empty() {
            return Err(ConfigError::EmptyArray);
        }
        Ok((algorithm, cadence))
    }
}
