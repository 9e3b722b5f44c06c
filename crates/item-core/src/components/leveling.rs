//! Leveling
//!
//! Experience accumulator and level counter that gate ability unlocks.

use serde::{Deserialize, Serialize};

use showcase_events::LevelSnapshot;

use crate::config::LevelingConfig;

/// Level state of one item.
///
/// `gain_experience` fires at most one level-up per call, even when the
/// amount would cross several thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leveling {
    level: u32,
    experience: f32,
    threshold: f32,
    growth_factor: f32,
}

impl Default for Leveling {
    fn default() -> Self {
        Self::from_config(&LevelingConfig::default())
    }
}

impl Leveling {
    pub fn new(initial_threshold: f32, growth_factor: f32) -> Self {
        Self {
            level: 0,
            experience: 0.0,
            threshold: initial_threshold,
            growth_factor,
        }
    }

    pub fn from_config(config: &LevelingConfig) -> Self {
        Self::new(config.initial_threshold, config.growth_factor)
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn experience(&self) -> f32 {
        self.experience
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Adds experience and levels up once if the total strictly exceeds the
    /// threshold. Returns whether a level-up happened.
    pub fn gain_experience(&mut self, amount: f32) -> bool {
        self.experience += amount;

        if self.experience > self.threshold {
            self.level_up();
            true
        } else {
            false
        }
    }

    /// Fraction of the current threshold reached, clamped to [0, 1].
    pub fn progress(&self) -> f32 {
        if self.threshold <= 0.0 {
            return 1.0;
        }
        (self.experience / self.threshold).clamp(0.0, 1.0)
    }

    pub fn snapshot(&self) -> LevelSnapshot {
        LevelSnapshot {
            level: self.level,
            experience: self.experience,
            threshold: self.threshold,
            progress: self.progress(),
        }
    }

    fn level_up(&mut self) {
        self.threshold *= self.growth_factor;
        self.experience = 0.0;
        self.level += 1;
        tracing::debug!(level = self.level, threshold = self.threshold, "level up");
    }
}
