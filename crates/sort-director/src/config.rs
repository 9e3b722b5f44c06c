//! Configuration loading for the Director.
//!
//! All director settings are loaded from a TOML configuration file.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Complete Director configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorConfig {
    /// How consecutive swap cues are laid out in time
    #[serde(default)]
    pub playback: PlaybackConfig,
    /// How each swap's duration is split across its phases
    #[serde(default)]
    pub phases: PhaseWeights,
}

impl DirectorConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::IoError)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::TomlError)
    }

    /// Returns the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, TomlSerializeError> {
        toml::to_string_pretty(self).map_err(TomlSerializeError)
    }
}

/// Playback configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub policy: PlaybackPolicy,
}

/// When each swap cue starts relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackPolicy {
    /// Each swap is fully shown before the next one starts
    #[default]
    Sequential,
    /// Swap k starts `k * stagger_secs` after the first, possibly overlapping
    Overlapped { stagger_secs: f32 },
}

/// Relative length of the three phases of a swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseWeights {
    /// Both entities leave the row
    pub lift: f32,
    /// The entities trade places
    pub cross: f32,
    /// Both entities return to the row
    pub settle: f32,
}

impl Default for PhaseWeights {
    fn default() -> Self {
        Self {
            lift: 1.0,
            cross: 1.0,
            settle: 1.0,
        }
    }
}

impl PhaseWeights {
    /// Splits `duration` proportionally to the weights.
    ///
    /// Non-positive totals fall back to equal thirds.
    pub fn split(&self, duration: f32) -> [f32; 3] {
        let weights = [self.lift, self.cross, self.settle].map(|w| w.max(0.0));
        let total: f32 = weights.iter().sum();
        if total <= 0.0 {
            return [duration / 3.0; 3];
        }
        weights.map(|w| duration * w / total)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error reading config file
    IoError(std::io::Error),
    /// Error parsing TOML config
    TomlError(toml::de::Error),
}

/// Error that can occur during TOML serialization.
#[derive(Debug)]
pub struct TomlSerializeError(pub toml::ser::Error);

impl std::fmt::Display for TomlSerializeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TOML serialize error: {}", self.0)
    }
}

impl std::error::Error for TomlSerializeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::TomlError(e) => write!(f, "TOML parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::TomlError(e) => Some(e),
        }
    }
}

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Sort Director Configuration

[playback]
# "sequential", or { overlapped = { stagger_secs = 0.25 } }
policy = "sequential"

[phases]
lift = 1.0
cross = 1.0
settle = 1.0
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DirectorConfig::default();
        assert_eq!(config.playback.policy, PlaybackPolicy::Sequential);
        assert_eq!(config.phases, PhaseWeights::default());
    }

    #[test]
    fn test_default_toml_parses_to_default() {
        let config = DirectorConfig::from_str(&default_config_toml()).unwrap();
        assert_eq!(config, DirectorConfig::default());
    }

    #[test]
    fn test_overlapped_policy() {
        let config = DirectorConfig::from_str(
            r#"
[playback]
policy = { overlapped = { stagger_secs = 0.25 } }
"#,
        )
        .unwrap();
        assert_eq!(
            config.playback.policy,
            PlaybackPolicy::Overlapped { stagger_secs: 0.25 }
        );
    }

    #[test]
    fn test_partial_config() {
        let config = DirectorConfig::from_str("[phases]\ncross = 2.0").unwrap();
        assert_eq!(config.phases.cross, 2.0);
        assert_eq!(config.phases.lift, 1.0);
        assert_eq!(config.playback.policy, PlaybackPolicy::Sequential);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut config = DirectorConfig::default();
        config.playback.policy = PlaybackPolicy::Overlapped { stagger_secs: 0.5 };
        let toml_str = config.to_toml().unwrap();
        assert_eq!(DirectorConfig::from_str(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            DirectorConfig::from_str("[playback\npolicy"),
            Err(ConfigError::TomlError(_))
        ));
    }

    #[test]
    fn test_phase_split() {
        assert_eq!(PhaseWeights::default().split(3.0), [1.0, 1.0, 1.0]);

        let weighted = PhaseWeights {
            lift: 1.0,
            cross: 2.0,
            settle: 1.0,
        };
        assert_eq!(weighted.split(2.0), [0.5, 1.0, 0.5]);

        let degenerate = PhaseWeights {
            lift: 0.0,
            cross: -1.0,
            settle: 0.0,
        };
        assert_eq!(degenerate.split(3.0), [1.0, 1.0, 1.0]);
    }
}
