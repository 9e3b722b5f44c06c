//! Sort Trace System
//!
//! Bubble sort over identifier-bearing entities that reports every exchange
//! as it happens, so a visualization can replay the sort step by step.

use showcase_events::{SortTrace, SwapRecord};

/// Anything with a comparable unsigned identifier.
///
/// Identifiers need not be unique; equal identifiers are never exchanged.
pub trait Identified {
    fn identifier(&self) -> u64;
}

impl Identified for u64 {
    fn identifier(&self) -> u64 {
        *self
    }
}

impl Identified for u32 {
    fn identifier(&self) -> u64 {
        u64::from(*self)
    }
}

/// One exchange, borrowed from the slice right after it happened.
///
/// `left` now sits at `index` and `right` at `index + 1`.
#[derive(Debug)]
pub struct SwapEvent<'a, T> {
    pub pass: u32,
    pub index: usize,
    pub left: &'a T,
    pub right: &'a T,
    pub duration_secs: f32,
}

impl<T: Identified> SwapEvent<'_, T> {
    pub fn to_record(&self) -> SwapRecord {
        SwapRecord::new(
            self.pass,
            self.index,
            self.left.identifier(),
            self.right.identifier(),
            self.duration_secs,
        )
    }
}

/// Sorts `items` ascending by identifier in place, calling `emit` after each
/// exchange in the order they happen. Returns the number of exchanges.
///
/// Pass `i` compares positions `0..n-1-i`. The comparison is strict, so the
/// sort is stable.
pub fn sort_with_trace<T, F>(items: &mut [T], duration_secs: f32, mut emit: F) -> usize
where
    T: Identified,
    F: FnMut(SwapEvent<'_, T>),
{
    let len = items.len();
    let mut swaps = 0;

    for pass in 0..len.saturating_sub(1) {
        for index in 0..len - 1 - pass {
            if items[index].identifier() > items[index + 1].identifier() {
                items.swap(index, index + 1);
                swaps += 1;
                tracing::debug!(pass, index, "exchanged adjacent entities");

                emit(SwapEvent {
                    pass: pass as u32,
                    index,
                    left: &items[index],
                    right: &items[index + 1],
                    duration_secs,
                });
            }
        }
    }

    swaps
}

/// Number of adjacent comparisons the bubble sort makes on `len` entities.
pub fn comparison_count(len: usize) -> u64 {
    let len = len as u64;
    len * len.saturating_sub(1) / 2
}

pub fn identifiers<T: Identified>(items: &[T]) -> Vec<u64> {
    items.iter().map(Identified::identifier).collect()
}

/// Sorts `items` and collects the exchanges into an owned trace.
pub fn sort_collecting_trace<T: Identified>(
    items: &mut [T],
    trace_id: impl Into<String>,
    duration_secs: f32,
) -> SortTrace {
    let mut trace = SortTrace::new(trace_id, identifiers(items));
    sort_with_trace(items, duration_secs, |swap| trace.record(swap.to_record()));
    trace.finish(identifiers(items), comparison_count(items.len()));
    trace
}
