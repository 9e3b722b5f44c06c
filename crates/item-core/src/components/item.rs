//! Item Components
//!
//! An item owns its ability chain and leveling state and carries the
//! identifier the row is sorted by.

use rand::Rng;

use showcase_events::ItemSnapshot;

use super::ability::Ability;
use super::chain::AbilityChain;
use super::leveling::Leveling;
use crate::systems::Identified;

/// A single item in the showcase row
#[derive(Debug)]
pub struct Item {
    /// Sort key, re-rolled on demand
    id: u32,
    name: String,
    item_type: String,
    /// Authored description; empty means one is generated from the id
    description: String,
    abilities: AbilityChain,
    leveling: Leveling,
}

impl Item {
    pub fn new(name: impl Into<String>, abilities: AbilityChain, leveling: Leveling) -> Self {
        Self {
            id: 0,
            name: name.into(),
            item_type: String::new(),
            description: String::new(),
            abilities,
            leveling,
        }
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    pub fn with_type(mut self, item_type: impl Into<String>) -> Self {
        self.item_type = item_type.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    pub fn description(&self) -> String {
        if self.description.is_empty() {
            format!("Too Lazy to put description for item #{}", self.id)
        } else {
            self.description.clone()
        }
    }

    pub fn abilities(&self) -> &AbilityChain {
        &self.abilities
    }

    /// Mutable access for listener registration.
    pub fn abilities_mut(&mut self) -> &mut AbilityChain {
        &mut self.abilities
    }

    pub fn leveling(&self) -> &Leveling {
        &self.leveling
    }

    pub fn level(&self) -> u32 {
        self.leveling.level()
    }

    /// Draws a fresh identifier in `0..u32::MAX`.
    pub fn regenerate_id<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.id = rng.gen_range(0..u32::MAX);
    }

    pub fn gain_experience(&mut self, amount: f32) -> bool {
        let leveled = self.leveling.gain_experience(amount);
        if leveled {
            tracing::debug!(item = %self.name, level = self.level(), "item leveled up");
        }
        leveled
    }

    pub fn level_up_progress(&self) -> f32 {
        self.leveling.progress()
    }

    pub fn next_locked_ability(&self) -> Option<&Ability> {
        self.abilities.find_next_locked(self.level())
    }

    pub fn unlocked_abilities(&self) -> Vec<&Ability> {
        self.abilities.all_unlocked_at_or_below(self.level())
    }

    /// Activates every unlocked ability. Returns how many listeners ran.
    pub fn activate_unlocked(&mut self) -> usize {
        let level = self.level();
        self.abilities
            .ids()
            .into_iter()
            .filter_map(|id| {
                let ability = self.abilities.get_mut(id)?;
                ability.is_unlocked_at(level).then(|| ability.activate())
            })
            .sum()
    }

    pub fn snapshot(&self) -> ItemSnapshot {
        let level = self.level();
        ItemSnapshot {
            item_id: self.id,
            name: self.name.clone(),
            item_type: self.item_type.clone(),
            description: self.description(),
            leveling: self.leveling.snapshot(),
            next_locked: self.next_locked_ability().map(|a| a.snapshot(level)),
            abilities: self.abilities.iter().map(|a| a.snapshot(level)).collect(),
        }
    }
}

impl Identified for Item {
    fn identifier(&self) -> u64 {
        u64::from(self.id)
    }
}
