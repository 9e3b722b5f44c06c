//! Showcase Row
//!
//! The row of items a visualization walks through: award experience, re-roll
//! identifiers, and sort by identifier while recording the trace.

use rand::Rng;

use showcase_events::{generate_trace_id, ItemSnapshot, SortTrace};

use crate::components::Item;
use crate::config::Tuning;
use crate::setup::regenerate_ids;
use crate::systems::sort_collecting_trace;

/// Owns the items of one showcase and the tuning they were built with.
#[derive(Debug)]
pub struct Showcase {
    items: Vec<Item>,
    tuning: Tuning,
    /// Number of sorts run so far, used for trace ids
    sorts_run: u64,
}

impl Showcase {
    pub fn new(items: Vec<Item>, tuning: Tuning) -> Self {
        Self {
            items,
            tuning,
            sorts_run: 0,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Gives every item the same amount of experience. Returns how many leveled up.
    pub fn award_experience(&mut self, amount: f32) -> usize {
        self.items
            .iter_mut()
            .map(|item| item.gain_experience(amount))
            .filter(|leveled| *leveled)
            .count()
    }

    pub fn regenerate_ids<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        regenerate_ids(&mut self.items, rng);
    }

    /// Sorts the row by item id and returns the trace of exchanges.
    pub fn sort_items(&mut self) -> SortTrace {
        self.sorts_run += 1;
        let trace = sort_collecting_trace(
            &mut self.items,
            generate_trace_id(self.sorts_run),
            self.tuning.sorting.swap_duration_secs,
        );
        tracing::info!(
            "Sorted {} items with {} exchanges ({})",
            self.items.len(),
            trace.swap_count(),
            trace.trace_id
        );
        trace
    }

    pub fn snapshots(&self) -> Vec<ItemSnapshot> {
        self.items.iter().map(Item::snapshot).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{AbilityChain, Leveling};

    fn row(ids: &[u32]) -> Showcase {
        let items = ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                Item::new(format!("item {}", i), AbilityChain::new(), Leveling::default()).with_id(*id)
            })
            .collect();
        Showcase::new(items, Tuning::default())
    }

    #[test]
    fn test_sort_items_orders_row() {
        let mut showcase = row(&[5, 3, 4, 1]);
        let trace = showcase.sort_items();

        let ids: Vec<u32> = showcase.items().iter().map(Item::id).collect();
        assert_eq!(ids, vec![1, 3, 4, 5]);
        assert_eq!(trace.trace_id, "trace_00001");
        assert_eq!(trace.swap_count(), 5);
        assert!(trace.swaps.iter().all(|s| s.duration_secs == 1.0));

        let again = showcase.sort_items();
        assert_eq!(again.trace_id, "trace_00002");
        assert_eq!(again.swap_count(), 0);
    }

    #[test]
    fn test_award_experience_counts_level_ups() {
        let mut showcase = row(&[1, 2]);
        assert_eq!(showcase.award_experience(3.0), 0);
        assert_eq!(showcase.award_experience(3.0), 2);
        assert!(showcase.items().iter().all(|item| item.level() == 1));
    }

    #[test]
    fn test_snapshots_follow_row_order() {
        let mut showcase = row(&[9, 2]);
        showcase.sort_items();
        let ids: Vec<u32> = showcase.snapshots().iter().map(|s| s.item_id).collect();
        assert_eq!(ids, vec![2, 9]);
    }
}
