//! Sort Trace Types
//!
//! Owned, serializable records of the exchanges performed while sorting a row
//! of items. A trace is what the visualization layer replays.
//!
//! # Example
//!
//! ```
//! use showcase_events::{SortTrace, SwapRecord};
//!
//! let mut trace = SortTrace::new("trace_00001", vec![5, 3]);
//! trace.record(SwapRecord::new(0, 0, 3, 5, 1.0));
//! trace.finish(vec![3, 5], 1);
//!
//! assert_eq!(trace.swap_count(), 1);
//! assert!(trace.is_sorted());
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One exchange of two adjacent entities.
///
/// `left_id` is the identifier now sitting at `index`, `right_id` the one now
/// at `index + 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRecord {
    /// Order in which the exchange happened (0-based)
    pub step: u32,
    /// Outer bubble pass that produced the exchange
    pub pass: u32,
    /// Left position of the exchanged pair
    pub index: usize,
    pub left_id: u64,
    pub right_id: u64,
    /// Visualization duration requested by the caller
    pub duration_secs: f32,
}

impl SwapRecord {
    /// Creates a new swap record. `step` is assigned when it is recorded on a trace.
    pub fn new(pass: u32, index: usize, left_id: u64, right_id: u64, duration_secs: f32) -> Self {
        Self {
            step: 0,
            pass,
            index,
            left_id,
            right_id,
            duration_secs,
        }
    }

    /// Serializes the record as a single JSON line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a record from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

/// Complete trace of one sort run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortTrace {
    pub trace_id: String,
    /// Unique id of the run that produced this trace, if stamped
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<Uuid>,
    /// Identifiers in their order before sorting
    pub initial_order: Vec<u64>,
    /// Identifiers in their order after sorting
    #[serde(default)]
    pub final_order: Vec<u64>,
    /// Number of adjacent comparisons performed
    #[serde(default)]
    pub comparisons: u64,
    #[serde(default)]
    pub swaps: Vec<SwapRecord>,
}

impl SortTrace {
    /// Starts an empty trace over the given initial order.
    pub fn new(trace_id: impl Into<String>, initial_order: Vec<u64>) -> Self {
        Self {
            trace_id: trace_id.into(),
            run_id: None,
            initial_order,
            final_order: Vec::new(),
            comparisons: 0,
            swaps: Vec::new(),
        }
    }

    /// Stamps the trace with a fresh random run id.
    pub fn with_run_id(mut self) -> Self {
        self.run_id = Some(generate_run_id());
        self
    }

    /// Appends a swap, numbering it after the ones already recorded.
    pub fn record(&mut self, mut swap: SwapRecord) {
        swap.step = self.swaps.len() as u32;
        self.swaps.push(swap);
    }

    /// Closes the trace with the final order and comparison count.
    pub fn finish(&mut self, final_order: Vec<u64>, comparisons: u64) {
        self.final_order = final_order;
        self.comparisons = comparisons;
    }

    pub fn swap_count(&self) -> usize {
        self.swaps.len()
    }

    /// Sum of all swap durations, i.e. the playback length when swaps never overlap.
    pub fn total_duration_secs(&self) -> f32 {
        self.swaps.iter().map(|s| s.duration_secs).sum()
    }

    /// Returns true if the final order is ascending.
    pub fn is_sorted(&self) -> bool {
        self.final_order.windows(2).all(|w| w[0] <= w[1])
    }

    /// Serializes every swap as JSON Lines (one record per line).
    pub fn swaps_to_jsonl(&self) -> Result<String, serde_json::Error> {
        let mut out = String::new();
        for swap in &self.swaps {
            out.push_str(&swap.to_jsonl()?);
            out.push('\n');
        }
        Ok(out)
    }

    /// Parses swap records from JSON Lines, skipping blank lines.
    pub fn swaps_from_jsonl(content: &str) -> Result<Vec<SwapRecord>, serde_json::Error> {
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(SwapRecord::from_jsonl)
            .collect()
    }
}

/// Generates a trace ID with the given sequence number.
pub fn generate_trace_id(sequence: u64) -> String {
    format!("trace_{:05}", sequence)
}

/// Generates a random run ID.
pub fn generate_run_id() -> Uuid {
    Uuid::new_v4()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_assigns_steps() {
        let mut trace = SortTrace::new("trace_00001", vec![3, 2, 1]);
        trace.record(SwapRecord::new(0, 0, 2, 3, 1.0));
        trace.record(SwapRecord::new(0, 1, 1, 3, 1.0));
        trace.record(SwapRecord::new(1, 0, 1, 2, 1.0));

        let steps: Vec<u32> = trace.swaps.iter().map(|s| s.step).collect();
        assert_eq!(steps, vec![0, 1, 2]);
        assert_eq!(trace.total_duration_secs(), 3.0);
    }

    #[test]
    fn test_is_sorted() {
        let mut trace = SortTrace::new("t", vec![2, 1]);
        assert!(trace.is_sorted()); // empty final order

        trace.finish(vec![2, 1], 1);
        assert!(!trace.is_sorted());

        trace.finish(vec![1, 2, 2], 3);
        assert!(trace.is_sorted());
    }

    #[test]
    fn test_swap_record_serialization() {
        let mut record = SwapRecord::new(1, 2, 7, 9, 0.5);
        record.step = 4;
        let json = record.to_jsonl().unwrap();
        assert_eq!(
            json,
            r#"{"step":4,"pass":1,"index":2,"left_id":7,"right_id":9,"duration_secs":0.5}"#
        );
    }

    #[test]
    fn test_swaps_jsonl_lines() {
        let mut trace = SortTrace::new("t", vec![2, 1]);
        trace.record(SwapRecord::new(0, 0, 1, 2, 1.0));

        let jsonl = trace.swaps_to_jsonl().unwrap();
        assert_eq!(jsonl.lines().count(), 1);
        assert!(jsonl.ends_with('\n'));

        let parsed = SortTrace::swaps_from_jsonl(&format!("\n{}\n\n", jsonl)).unwrap();
        assert_eq!(parsed, trace.swaps);
    }

    #[test]
    fn test_run_id_omitted_when_absent() {
        let trace = SortTrace::new("t", vec![]);
        let json = serde_json::to_string(&trace).unwrap();
        assert!(!json.contains("run_id"));

        let stamped = trace.with_run_id();
        assert!(stamped.run_id.is_some());
    }

    #[test]
    fn test_generate_trace_id() {
        assert_eq!(generate_trace_id(1), "trace_00001");
        assert_eq!(generate_trace_id(4242), "trace_04242");
    }
}
