use crate::creature::{Attribute, Plantmon, Skill};
use crate::errors::{DataError, DataResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A creature definition as stored in a RON data file; the pool members
/// the enemy generator and capture placeholder draw from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WildCreature {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub attributes: Vec<Attribute>,
    pub skills: Vec<Skill>,
    pub max_health: u16,
}

impl WildCreature {
    /// Instantiate this definition as a full-health enemy for one encounter.
    pub fn into_enemy(self) -> Plantmon {
        Plantmon {
            id: self.id,
            name: self.name,
            description: self.description,
            image: self.image,
            attributes: self.attributes,
            skills: self.skills,
            health: self.max_health,
            max_health: self.max_health,
            is_active: false,
            captured_at: 0,
        }
    }

    /// Instantiate this definition as a freshly captured creature, stamped
    /// with the capture flow's id and timestamp.
    pub fn into_capture(self, id: String, captured_at: u64) -> Plantmon {
        let mut creature = self.into_enemy();
        creature.id = id;
        creature.captured_at = captured_at;
        creature
    }
}

/// A fixed small pool of creature definitions loaded from disk.
#[derive(Debug, Clone)]
pub struct WildPool {
    creatures: Vec<WildCreature>,
}

impl WildPool {
    /// Load every `.ron` creature definition in `dir`.
    pub fn load(dir: &Path) -> DataResult<WildPool> {
        if !dir.exists() {
            return Err(DataError::DirectoryNotFound(dir.to_path_buf()));
        }

        let mut creatures = Vec::new();
        let mut entries: Vec<_> = fs::read_dir(dir)?
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("ron"))
            .collect();
        // Stable pool order regardless of directory iteration order
        entries.sort();

        for path in entries {
            let content = fs::read_to_string(&path)?;
            let creature: WildCreature = ron::from_str(&content)?;
            creatures.push(creature);
        }

        if creatures.is_empty() {
            return Err(DataError::EmptyPool(dir.to_path_buf()));
        }

        Ok(WildPool { creatures })
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn creatures(&self) -> &[WildCreature] {
        &self.creatures
    }

    /// Draw a uniform-random enemy for a new encounter.
    pub fn random_enemy(&self) -> Plantmon {
        use rand::Rng;
        let index = rand::rng().random_range(0..self.creatures.len());
        self.creatures[index].clone().into_enemy()
    }

    /// Draw a uniform-random capture result, stamped with the caller's id
    /// and timestamp. Stands in for the identification service's answer.
    pub fn random_capture(&self, id: String, now_ms: u64) -> Plantmon {
        use rand::Rng;
        let index = rand::rng().random_range(0..self.creatures.len());
        self.creatures[index].clone().into_capture(id, now_ms)
    }
}
