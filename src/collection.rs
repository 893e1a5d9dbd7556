use crate::creature::Plantmon;
use serde::{Deserialize, Serialize};

/// The authoritative list of owned creatures.
///
/// Constructed explicitly and passed by handle to the screens that consume
/// it; all mutation goes through the operations below. Invariant held by
/// every operation: at most one creature carries `is_active = true`, and
/// `active_creature()` returns exactly that creature or nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    creatures: Vec<Plantmon>,
    active_id: Option<String>,
    is_first_time: bool,
}

impl Collection {
    pub fn new() -> Self {
        Collection {
            creatures: Vec::new(),
            active_id: None,
            is_first_time: true,
        }
    }

    /// Append a captured creature. Ids are assigned by the capture flow and
    /// assumed unique. Does not auto-select; selection is a separate,
    /// explicit operation.
    pub fn add_creature(&mut self, creature: Plantmon) {
        self.creatures.push(creature);
        self.is_first_time = false;
    }

    /// Designate the creature with `id` for battle.
    ///
    /// If no creature matches, the state is left entirely unchanged.
    pub fn set_active(&mut self, id: &str) {
        if !self.creatures.iter().any(|c| c.id == id) {
            return;
        }
        for creature in &mut self.creatures {
            creature.is_active = creature.id == id;
        }
        self.active_id = Some(id.to_string());
    }

    /// Clear the battle designation on every creature, unconditionally.
    pub fn clear_active(&mut self) {
        for creature in &mut self.creatures {
            creature.is_active = false;
        }
        self.active_id = None;
    }

    /// Wholesale state replacement, used when loading a persisted snapshot.
    pub fn replace_state(&mut self, state: Collection) {
        *self = state;
    }

    pub fn creatures(&self) -> &[Plantmon] {
        &self.creatures
    }

    /// The single creature currently designated for battle, if any.
    pub fn active_creature(&self) -> Option<&Plantmon> {
        let id = self.active_id.as_deref()?;
        self.creatures.iter().find(|c| c.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Plantmon> {
        self.creatures.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// True until the first creature is ever added; never reset.
    pub fn is_first_time(&self) -> bool {
        self.is_first_time
    }

    /// Serialize the collection for persistence.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize a persisted collection snapshot; feed the result to
    /// `replace_state`.
    pub fn from_json(json: &str) -> serde_json::Result<Collection> {
        serde_json::from_str(json)
    }
}

impl Default for Collection {
    fn default() -> Self {
        Self::new()
    }
}
