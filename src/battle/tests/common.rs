use crate::creature::{Attribute, ImageSources, Plantmon, Skill};

/// A builder for creating test creatures with common defaults.
///
/// # Example
/// ```rust,ignore
/// let creature = TestCreatureBuilder::new("player", "Flame Blossom")
///     .with_skill("Flame Burst", 25)
///     .with_max_health(100)
///     .build();
/// ```
pub struct TestCreatureBuilder {
    id: String,
    name: String,
    skills: Vec<Skill>,
    max_health: u16,
    health: Option<u16>,
}

impl TestCreatureBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            skills: Vec::new(),
            max_health: 100,
            health: None,
        }
    }

    pub fn with_skill(mut self, name: &str, damage: u16) -> Self {
        let index = self.skills.len();
        self.skills.push(Skill {
            id: format!("skill-{}", index),
            name: name.to_string(),
            description: String::new(),
            damage,
            attribute: Attribute::Grass,
        });
        self
    }

    pub fn with_max_health(mut self, max_health: u16) -> Self {
        self.max_health = max_health;
        self
    }

    /// Sets the current health. If not set, the creature starts at max.
    pub fn with_health(mut self, health: u16) -> Self {
        self.health = Some(health);
        self
    }

    pub fn build(self) -> Plantmon {
        let mut creature = Plantmon::new(
            self.id,
            self.name,
            String::new(),
            ImageSources::default(),
            vec![Attribute::Grass],
            self.skills,
            self.max_health,
            0,
        )
        .expect("test creature should be valid");

        if let Some(health) = self.health {
            creature.health = health;
        }
        creature
    }
}
