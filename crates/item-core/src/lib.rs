//! Item showcase core: ability chains, leveling, and traced sorting.
//!
//! # Modules
//!
//! - [`components`]: Abilities, the level-ordered ability chain, leveling, items
//! - [`systems`]: Bubble sort that reports every exchange
//! - [`setup`]: Roster loading and item construction
//! - [`config`]: Tuning loaded from TOML
//! - [`showcase`]: The row of items a visualization walks through

pub mod components;
pub mod config;
pub mod setup;
pub mod showcase;
pub mod systems;

pub use components::*;
pub use config::{
    ChainConfig, LevelingConfig, SortingConfig, Tuning, TuningError, DEFAULT_TUNING_PATH,
};
pub use setup::{build_item, build_items, regenerate_ids, ItemDefinition, Roster, RosterError};
pub use showcase::Showcase;
pub use systems::{sort_collecting_trace, sort_with_trace, Identified, SwapEvent};

/// Errors that can occur while running a showcase end to end.
#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    #[error("Tuning error: {0}")]
    Tuning(#[from] TuningError),
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),
    #[error("Director error: {0}")]
    Director(#[from] sort_director::DirectorError),
}
