use crate::errors::{CreatureError, CreatureResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attribute {
    Fire,
    Water,
    Grass,
    Electric,
    Flying,
    Ground,
}

/// A named battle action with a base damage value.
/// The attribute may differ from the owner's attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub description: String,
    pub damage: u16,
    pub attribute: Attribute,
}

/// Candidate image fields as returned by the identification service.
///
/// The history of the data model carried several overlapping image fields;
/// they are consolidated here with a single precedence rule, resolved once
/// at construction time: `no_bg_image_url` > `image_url` > legacy `image`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSources {
    pub no_bg_image_url: Option<String>,
    pub image_url: Option<String>,
    pub image: Option<String>,
}

impl ImageSources {
    pub fn resolve(self) -> Option<String> {
        self.no_bg_image_url.or(self.image_url).or(self.image)
    }
}

/// A collectible creature instance.
///
/// Created exactly once at capture time and immutable afterwards except for
/// `is_active` (toggled by the collection) and `health` (reduced only on the
/// disposable copy an encounter operates on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plantmon {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub attributes: Vec<Attribute>,
    pub skills: Vec<Skill>,
    pub health: u16,
    pub max_health: u16,
    pub is_active: bool,
    pub captured_at: u64,
}

impl Plantmon {
    /// Create a new creature at full health.
    ///
    /// `captured_at` is epoch milliseconds, stamped by the capture flow.
    pub fn new(
        id: String,
        name: String,
        description: String,
        image: ImageSources,
        attributes: Vec<Attribute>,
        skills: Vec<Skill>,
        max_health: u16,
        captured_at: u64,
    ) -> CreatureResult<Self> {
        if max_health == 0 {
            return Err(CreatureError::ZeroMaxHealth);
        }
        if attributes.is_empty() {
            return Err(CreatureError::NoAttributes);
        }
        if skills.is_empty() {
            return Err(CreatureError::NoSkills);
        }

        Ok(Plantmon {
            id,
            name,
            description,
            image: image.resolve(),
            attributes,
            skills,
            health: max_health,
            max_health,
            is_active: false,
            captured_at,
        })
    }

    /// Apply damage, clamping health at zero.
    /// Returns true if this hit brought the creature down.
    pub fn take_damage(&mut self, amount: u16) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.health == 0
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Reset to full health. Used when seeding a fresh battle copy
    /// for a rematch; the canonical collection copy is never touched.
    pub fn restore(&mut self) {
        self.health = self.max_health;
    }

    /// Look up a skill by its position in display/selection order.
    pub fn skill(&self, index: usize) -> Option<&Skill> {
        self.skills.get(index)
    }
}

/// Capture-time id assignment: the capture flow stamps the current
/// epoch-millisecond timestamp, which is unique for interactive captures.
pub fn capture_id(now_ms: u64) -> String {
    now_ms.to_string()
}
