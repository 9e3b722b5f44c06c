//! Shared trace and snapshot types for the item showcase.
//!
//! This crate contains pure data structures with no sorting or chain logic.
//! It is a dependency for all other crates in the workspace.

pub mod snapshot;
pub mod trace;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

// Re-export trace types
pub use trace::{generate_run_id, generate_trace_id, SortTrace, SwapRecord};

// Re-export snapshot types
pub use snapshot::{
    generate_snapshot_id, AbilitySnapshot, ItemSnapshot, LevelSnapshot, RowSnapshot,
};
