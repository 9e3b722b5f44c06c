//! Item Components
//!
//! Abilities, the chain that orders them, leveling, and the item that owns both.

pub mod ability;
pub mod chain;
pub mod item;
pub mod leveling;

pub use ability::*;
pub use chain::*;
pub use item::*;
pub use leveling::*;
