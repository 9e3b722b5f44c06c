//! Roster Setup
//!
//! Reads the item roster from TOML and builds the items it describes.
//!
//! ```toml
//! [[items]]
//! name = "Lantern"
//! item_type = "tool"
//!
//! [[items.abilities]]
//! name = "Glow"
//! description = "Lights the room"
//! unlock_level = 1
//! activates = true
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::components::{build_chain, AbilityDefinition, Item, Leveling};
use crate::config::Tuning;

/// All items of a showcase row, in their initial order.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
}

/// One item as written in the roster file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub name: String,
    #[serde(default)]
    pub item_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub abilities: Vec<AbilityDefinition>,
}

impl Roster {
    /// Loads a roster from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_str(&content)
    }

    /// Parses a roster from a TOML string. A roster without items is rejected.
    pub fn from_str(content: &str) -> Result<Self, RosterError> {
        let roster: Roster = toml::from_str(content)?;
        if roster.items.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(roster)
    }
}

/// Errors that can occur while loading a roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("roster defines no items")]
    Empty,
}

/// Builds one item: deduplicated chain, fresh leveling, random identifier.
pub fn build_item<R: Rng + ?Sized>(definition: ItemDefinition, tuning: &Tuning, rng: &mut R) -> Item {
    let chain = build_chain(definition.abilities, tuning.chain.policy);
    let mut item = Item::new(
        definition.name,
        chain,
        Leveling::from_config(&tuning.leveling),
    )
    .with_type(definition.item_type)
    .with_description(definition.description);
    item.regenerate_id(rng);
    item
}

/// Builds every item of the roster, keeping roster order.
pub fn build_items<R: Rng + ?Sized>(roster: Roster, tuning: &Tuning, rng: &mut R) -> Vec<Item> {
    let items: Vec<Item> = roster
        .items
        .into_iter()
        .map(|definition| build_item(definition, tuning, rng))
        .collect();
    tracing::info!("Built {} items", items.len());
    items
}

/// Re-rolls the identifier of every item.
pub fn regenerate_ids<R: Rng + ?Sized>(items: &mut [Item], rng: &mut R) {
    for item in items.iter_mut() {
        item.regenerate_id(rng);
    }
}
