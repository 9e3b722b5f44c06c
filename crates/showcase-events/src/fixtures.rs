//! Sample data fixtures for testing.
//!
//! This module provides ready-made test data for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // showcase-events = { path = "../showcase-events", features = ["test-fixtures"] }
//!
//! use showcase_events::fixtures;
//!
//! let trace = fixtures::sample_trace();
//! assert_eq!(trace.swap_count(), 5);
//! ```

use crate::{SortTrace, SwapRecord};

/// Returns the trace of bubble sorting `[5, 3, 4, 1]` with one-second swaps.
///
/// Contains 5 exchanges, one per inversion of the input:
/// - pass 0: (3,5) at 0, (4,5) at 1, (1,5) at 2
/// - pass 1: (1,4) at 1
/// - pass 2: (1,3) at 0
pub fn sample_trace() -> SortTrace {
    let mut trace = SortTrace::new("trace_00001", vec![5, 3, 4, 1]);
    for swap in sample_swaps() {
        trace.record(swap);
    }
    trace.finish(vec![1, 3, 4, 5], 6);
    trace
}

/// Returns the swaps produced by bubble sorting `[5, 3, 4, 1]`.
pub fn sample_swaps() -> Vec<SwapRecord> {
    vec![
        SwapRecord::new(0, 0, 3, 5, 1.0),
        SwapRecord::new(0, 1, 4, 5, 1.0),
        SwapRecord::new(0, 2, 1, 5, 1.0),
        SwapRecord::new(1, 1, 1, 4, 1.0),
        SwapRecord::new(2, 0, 1, 3, 1.0),
    ]
}

/// Returns a trace over an already sorted row: no swaps.
pub fn sorted_trace() -> SortTrace {
    let mut trace = SortTrace::new("trace_00002", vec![1, 3, 4, 5]);
    trace.finish(vec![1, 3, 4, 5], 6);
    trace
}
