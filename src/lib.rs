//! Plantmon Adventure game core
//!
//! The collection and battle logic behind a casual creature-collection
//! game: an insertion-ordered collection with a single active selection,
//! a strictly alternating turn-based encounter engine, and a virtual-time
//! driver that sequences the automatic enemy replies.

pub mod battle;
pub mod collection;
pub mod creature;
pub mod errors;
pub mod wild;

// --- PUBLIC API RE-EXPORTS ---

// Core battle engine types and the encounter driver.
pub use battle::driver::{EncounterDriver, PendingStep, ScheduledStep, STEP_DELAY_MS};
pub use battle::engine::{Encounter, FollowUp, StepOutcome, ENEMY_REPLY_DELAY_MS};
pub use battle::state::{BattleEvent, EncounterRng, EventBus, Outcome, TurnSide};

// Collection store and entity model.
pub use collection::Collection;
pub use creature::{capture_id, Attribute, ImageSources, Plantmon, Skill};

// Enemy and capture pools.
pub use wild::{WildCreature, WildPool};

// Crate-specific error and result types.
pub use errors::{
    CreatureError, CreatureResult, DataError, DataResult, GameError, GameResult,
};
