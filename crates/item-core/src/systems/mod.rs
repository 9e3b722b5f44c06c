//! Systems
//!
//! Algorithms that operate over a row of items.

pub mod sort_trace;

pub use sort_trace::{
    comparison_count, identifiers, sort_collecting_trace, sort_with_trace, Identified, SwapEvent,
};
