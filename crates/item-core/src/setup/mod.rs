//! Row Setup
//!
//! Roster loading and item construction.

pub mod roster;

pub use roster::*;
