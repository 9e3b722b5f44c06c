//! Configuration System
//!
//! Loads tuning parameters from tuning.toml for easy adjustment without recompiling.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::components::InsertPolicy;

/// Default tuning file path
pub const DEFAULT_TUNING_PATH: &str = "tuning.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    #[serde(default)]
    pub leveling: LevelingConfig,
    #[serde(default)]
    pub chain: ChainConfig,
    #[serde(default)]
    pub sorting: SortingConfig,
}

/// Experience curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelingConfig {
    /// Experience needed for the first level-up
    pub initial_threshold: f32,
    /// Threshold multiplier applied on every level-up
    pub growth_factor: f32,
}

impl Default for LevelingConfig {
    fn default() -> Self {
        Self {
            initial_threshold: 5.0,
            growth_factor: 2.0,
        }
    }
}

/// Ability chain construction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub policy: InsertPolicy,
}

/// Row sorting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortingConfig {
    /// Visualization duration attached to every exchange
    pub swap_duration_secs: f32,
}

impl Default for SortingConfig {
    fn default() -> Self {
        Self {
            swap_duration_secs: 1.0,
        }
    }
}

impl Tuning {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, TuningError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from `path`, or use defaults if the file does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!("Tuning file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml(&self) -> Result<String, TuningError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Errors that can occur while loading tuning.
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
