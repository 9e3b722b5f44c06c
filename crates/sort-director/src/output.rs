//! File output for sort runs.
//!
//! # Output Files
//!
//! - `items.json` - The row before and after sorting
//! - `trace.json` - Complete [`SortTrace`]
//! - `trace.jsonl` - One [`SwapRecord`] per line, for tailing
//! - `timeline.json` - The planned [`Timeline`]

use serde::Serialize;
use showcase_events::{RowSnapshot, SortTrace, SwapRecord};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::choreography::Timeline;

pub const ITEMS_FILE: &str = "items.json";
pub const TRACE_FILE: &str = "trace.json";
pub const SWAPS_FILE: &str = "trace.jsonl";
pub const TIMELINE_FILE: &str = "timeline.json";

/// Errors that can occur during output operations.
#[derive(Debug)]
pub enum OutputError {
    /// I/O error (file operations)
    Io(std::io::Error),
    /// JSON serialization error
    Json(serde_json::Error),
}

impl std::fmt::Display for OutputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputError::Io(e) => write!(f, "I/O error: {}", e),
            OutputError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(e) => Some(e),
            OutputError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for OutputError {
    fn from(e: std::io::Error) -> Self {
        OutputError::Io(e)
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(e: serde_json::Error) -> Self {
        OutputError::Json(e)
    }
}

/// Writes the files of one sort run into a directory.
#[derive(Debug)]
pub struct OutputWriter {
    output_dir: PathBuf,
}

impl OutputWriter {
    /// Creates the writer, creating the directory if it doesn't exist.
    pub fn new(output_dir: &Path) -> Result<Self, OutputError> {
        fs::create_dir_all(output_dir)?;
        Ok(Self {
            output_dir: output_dir.to_path_buf(),
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Writes `items.json`.
    pub fn write_row(&self, row: &RowSnapshot) -> Result<PathBuf, OutputError> {
        self.write_pretty(ITEMS_FILE, row)
    }

    /// Writes `trace.json` and `trace.jsonl`.
    pub fn write_trace(&self, trace: &SortTrace) -> Result<PathBuf, OutputError> {
        let path = self.write_pretty(TRACE_FILE, trace)?;

        let file = File::create(self.output_dir.join(SWAPS_FILE))?;
        let mut writer = BufWriter::new(file);
        for swap in &trace.swaps {
            writeln!(writer, "{}", swap.to_jsonl()?)?;
        }
        writer.flush()?;

        tracing::debug!("Wrote {} swaps to {}", trace.swap_count(), path.display());
        Ok(path)
    }

    /// Writes `timeline.json`.
    pub fn write_timeline(&self, timeline: &Timeline) -> Result<PathBuf, OutputError> {
        self.write_pretty(TIMELINE_FILE, timeline)
    }

    fn write_pretty<T: Serialize>(&self, file_name: &str, value: &T) -> Result<PathBuf, OutputError> {
        let path = self.output_dir.join(file_name);
        let file = File::create(&path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
        Ok(path)
    }
}

/// Reads trace files back from an output directory.
#[derive(Debug)]
pub struct TraceReader {
    output_dir: PathBuf,
}

impl TraceReader {
    pub fn from_dir(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// Reads the complete trace from `trace.json`.
    pub fn read_trace(&self) -> Result<SortTrace, OutputError> {
        let content = fs::read_to_string(self.output_dir.join(TRACE_FILE))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Reads the swap records from `trace.jsonl`, skipping blank lines.
    pub fn read_swaps(&self) -> Result<Vec<SwapRecord>, OutputError> {
        let content = fs::read_to_string(self.output_dir.join(SWAPS_FILE))?;
        Ok(SortTrace::swaps_from_jsonl(&content)?)
    }

    /// Reads the planned timeline from `timeline.json`.
    pub fn read_timeline(&self) -> Result<Timeline, OutputError> {
        let content = fs::read_to_string(self.output_dir.join(TIMELINE_FILE))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Reads the row snapshot from `items.json`.
    pub fn read_row(&self) -> Result<RowSnapshot, OutputError> {
        let content = fs::read_to_string(self.output_dir.join(ITEMS_FILE))?;
        Ok(serde_json::from_str(&content)?)
    }
}
