//! Ability Components
//!
//! Unlockable perks, the definitions they are built from, and the listener
//! lists fired when they activate.

use serde::{Deserialize, Serialize};
use std::fmt;

use showcase_events::AbilitySnapshot;

/// Callback invoked when an ability activates.
pub type Listener = Box<dyn FnMut() + Send>;

/// Handle returned when a listener is registered, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// Ordered list of listeners fired on activation.
#[derive(Default)]
pub struct Activation {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u32,
}

impl Activation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an activation with a single listener already registered.
    pub fn with_listener(listener: impl FnMut() + Send + 'static) -> Self {
        let mut activation = Self::new();
        activation.add(listener);
        activation
    }

    pub fn add(&mut self, listener: impl FnMut() + Send + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Calls every listener once, in registration order.
    pub fn invoke(&mut self) -> usize {
        for (_, listener) in self.listeners.iter_mut() {
            listener();
        }
        self.listeners.len()
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Activation")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Source record an ability is created from.
///
/// Roster files deserialize into definitions. Listeners cannot be written in a
/// roster, so `activates = true` only marks that the ability carries an
/// (initially empty) listener list; code attaches closures with
/// [`AbilityDefinition::with_activation`].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AbilityDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub unlock_level: u32,
    #[serde(default)]
    pub activates: bool,
    #[serde(skip)]
    activation: Option<Activation>,
}

impl AbilityDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>, unlock_level: u32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            unlock_level,
            activates: false,
            activation: None,
        }
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activates = true;
        self.activation = Some(activation);
        self
    }

    /// Turns the definition into a chain-ready ability.
    pub fn into_ability(self) -> Ability {
        let activation = match self.activation {
            Some(activation) => Some(activation),
            None if self.activates => Some(Activation::new()),
            None => None,
        };

        Ability {
            name: self.name,
            description: self.description,
            unlock_level: self.unlock_level,
            activation,
        }
    }
}

/// One unlockable perk, gated by the owning item's level.
#[derive(Debug)]
pub struct Ability {
    name: String,
    description: String,
    unlock_level: u32,
    activation: Option<Activation>,
}

impl Ability {
    pub fn new(name: impl Into<String>, description: impl Into<String>, unlock_level: u32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            unlock_level,
            activation: None,
        }
    }

    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = Some(activation);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn unlock_level(&self) -> u32 {
        self.unlock_level
    }

    pub fn has_activation(&self) -> bool {
        self.activation.is_some()
    }

    /// Fires the activation listeners, if the ability has any.
    ///
    /// Returns how many listeners ran.
    pub fn activate(&mut self) -> usize {
        match self.activation.as_mut() {
            Some(activation) => activation.invoke(),
            None => 0,
        }
    }

    /// Registers a listener. Abilities defined without an activation ignore it.
    pub fn add_listener(&mut self, listener: impl FnMut() + Send + 'static) -> Option<ListenerId> {
        self.activation
            .as_mut()
            .map(|activation| activation.add(listener))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.activation
            .as_mut()
            .is_some_and(|activation| activation.remove(id))
    }

    pub fn is_unlocked_at(&self, level: u32) -> bool {
        level >= self.unlock_level
    }

    /// Plain-text hint shown while the ability is still locked.
    pub fn unlock_requirement(&self) -> String {
        format!(
            "Requires Level {} To Unlock Next Ability (Unlocks {})",
            self.unlock_level, self.name
        )
    }

    pub fn snapshot(&self, current_level: u32) -> AbilitySnapshot {
        AbilitySnapshot {
            name: self.name.clone(),
            description: self.description.clone(),
            unlock_level: self.unlock_level,
            unlocked: self.is_unlocked_at(current_level),
        }
    }
}

impl fmt::Display for Ability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ability Name: {} | Description: {} | Unlock Level: {}",
            self.name, self.description, self.unlock_level
        )
    }
}
