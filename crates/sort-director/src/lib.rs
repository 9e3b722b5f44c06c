//! Sort Director: swap choreography and run output.
//!
//! The Director sits between the sorting core and visualization. It takes the
//! trace of a sort run, lays every exchange out on a timeline, and writes the
//! files the visualization layer plays back.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────┐   SortTrace    ┌───────────────┐   trace.jsonl, timeline.json
//! │ item-core │ ─────────────▶ │ sort-director │ ────────────────────────────▶
//! └───────────┘                └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`choreography`]: Timeline of three-phase swap cues
//! - [`config`]: Playback policy and phase weights from TOML
//! - [`output`]: Writing and reading run files

pub mod choreography;
pub mod config;
pub mod output;

// Re-export choreography types
pub use choreography::{ActiveCue, Choreographer, PhaseCue, PhaseKind, SwapCue, Timeline};

// Re-export config types
pub use config::{
    default_config_toml, ConfigError, DirectorConfig, PhaseWeights, PlaybackConfig,
    PlaybackPolicy, TomlSerializeError,
};

// Re-export output types
pub use output::{OutputError, OutputWriter, TraceReader};

use std::path::Path;

use showcase_events::{RowSnapshot, SortTrace};

/// Errors that can occur in Director operations.
#[derive(Debug)]
pub enum DirectorError {
    /// Error loading configuration
    Config(ConfigError),
    /// Error writing or reading run files
    Output(OutputError),
}

impl std::fmt::Display for DirectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectorError::Config(e) => write!(f, "Config error: {}", e),
            DirectorError::Output(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl std::error::Error for DirectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectorError::Config(e) => Some(e),
            DirectorError::Output(e) => Some(e),
        }
    }
}

impl From<ConfigError> for DirectorError {
    fn from(e: ConfigError) -> Self {
        DirectorError::Config(e)
    }
}

impl From<OutputError> for DirectorError {
    fn from(e: OutputError) -> Self {
        DirectorError::Output(e)
    }
}

/// Plans a sort run and writes all of its files.
#[derive(Debug, Default)]
pub struct Director {
    choreographer: Choreographer,
}

impl Director {
    pub fn new(config: DirectorConfig) -> Self {
        Self {
            choreographer: Choreographer::new(config),
        }
    }

    /// Creates a Director from a configuration file.
    pub fn from_config_file(path: &Path) -> Result<Self, DirectorError> {
        let config = DirectorConfig::from_file(path)?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &DirectorConfig {
        self.choreographer.config()
    }

    pub fn plan(&self, trace: &SortTrace) -> Timeline {
        self.choreographer.plan(trace)
    }

    /// Plans the trace and writes `items.json`, `trace.json`, `trace.jsonl`
    /// and `timeline.json` into `output_dir`.
    pub fn direct(
        &self,
        row: &RowSnapshot,
        trace: &SortTrace,
        output_dir: &Path,
    ) -> Result<Timeline, DirectorError> {
        let timeline = self.plan(trace);

        let writer = OutputWriter::new(output_dir)?;
        writer.write_row(row)?;
        writer.write_trace(trace)?;
        writer.write_timeline(&timeline)?;

        tracing::info!(
            "Directed {}: {} cues over {:.2}s into {}",
            trace.trace_id,
            timeline.len(),
            timeline.total_secs(),
            output_dir.display()
        );
        Ok(timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showcase_events::SwapRecord;
    use tempfile::tempdir;

    #[test]
    fn test_director_direct_writes_all_files() {
        let dir = tempdir().unwrap();
        let mut trace = SortTrace::new("trace_00001", vec![2, 1]);
        trace.record(SwapRecord::new(0, 0, 1, 2, 0.5));
        trace.finish(vec![1, 2], 1);

        let timeline = Director::default()
            .direct(&RowSnapshot::new("snap_000001", vec![], vec![]), &trace, dir.path())
            .unwrap();

        assert_eq!(timeline.len(), 1);
        for file in ["items.json", "trace.json", "trace.jsonl", "timeline.json"] {
            assert!(dir.path().join(file).exists(), "missing {}", file);
        }
    }

    #[test]
    fn test_from_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("director.toml");
        std::fs::write(&path, default_config_toml()).unwrap();

        let director = Director::from_config_file(&path).unwrap();
        assert_eq!(director.config(), &DirectorConfig::default());
    }

    #[test]
    fn test_missing_config_file() {
        let dir = tempdir().unwrap();
        let result = Director::from_config_file(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(DirectorError::Config(ConfigError::IoError(_)))));
    }

    #[test]
    fn test_director_error_display() {
        let err = DirectorError::from(OutputError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        )));
        assert!(err.to_string().starts_with("Output error: I/O error"));
    }
}
