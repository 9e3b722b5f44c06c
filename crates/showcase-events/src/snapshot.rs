//! Snapshot Types
//!
//! Serialization structs for item state output.
//!
//! Snapshots capture what a renderer needs to draw an item and its ability
//! listing at a point in time. They are produced by the core and never read
//! back into it.

use serde::{Deserialize, Serialize};

/// Generates a snapshot ID with the given sequence number.
pub fn generate_snapshot_id(sequence: u64) -> String {
    format!("snap_{:06}", sequence)
}

/// One ability as seen from its owning item's current level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbilitySnapshot {
    pub name: String,
    pub description: String,
    pub unlock_level: u32,
    /// Whether the owning item's level has reached `unlock_level`
    pub unlocked: bool,
}

/// Leveling progress of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    pub level: u32,
    pub experience: f32,
    pub threshold: f32,
    /// experience / threshold, clamped to [0, 1]
    pub progress: f32,
}

/// Full item snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub item_id: u32,
    pub name: String,
    #[serde(default)]
    pub item_type: String,
    #[serde(default)]
    pub description: String,
    pub leveling: LevelSnapshot,
    /// The next ability still locked, if any remain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_locked: Option<AbilitySnapshot>,
    /// Every ability in chain order
    #[serde(default)]
    pub abilities: Vec<AbilitySnapshot>,
}

impl ItemSnapshot {
    /// Returns true once no locked ability remains.
    pub fn all_unlocked(&self) -> bool {
        self.next_locked.is_none()
    }

    pub fn unlocked_count(&self) -> usize {
        self.abilities.iter().filter(|a| a.unlocked).count()
    }
}

/// Item row before and after a sort run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowSnapshot {
    pub snapshot_id: String,
    pub before: Vec<ItemSnapshot>,
    pub after: Vec<ItemSnapshot>,
}

impl RowSnapshot {
    pub fn new(snapshot_id: impl Into<String>, before: Vec<ItemSnapshot>, after: Vec<ItemSnapshot>) -> Self {
        Self {
            snapshot_id: snapshot_id.into(),
            before,
            after,
        }
    }

    /// Item ids of the row after sorting, left to right.
    pub fn sorted_ids(&self) -> Vec<u32> {
        self.after.iter().map(|item| item.item_id).collect()
    }
}
