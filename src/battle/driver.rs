use crate::battle::engine::{Encounter, FollowUp, StepOutcome};
use crate::battle::state::EncounterRng;
use crate::creature::Plantmon;

/// Cosmetic delay after every resolution before the driver accepts the
/// next player input, in virtual milliseconds.
pub const STEP_DELAY_MS: u64 = 1000;

/// A step the driver has agreed to execute at a fixed point on its clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledStep {
    pub kind: PendingStep,
    pub due_at_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingStep {
    EnemyReply,
}

/// Single-threaded driver for one encounter.
///
/// Replaces timer-callback chaining with explicit descriptors over virtual
/// time: each resolution hands back a "next action due at T + delay"
/// descriptor, and `advance` is the only thing that makes time pass. Tests
/// fast-forward instead of sleeping; tearing down the battle screen maps
/// to `cancel_pending`.
#[derive(Debug)]
pub struct EncounterDriver {
    encounter: Encounter,
    rng: EncounterRng,
    now_ms: u64,
    busy_until_ms: u64,
    pending: Option<ScheduledStep>,
}

impl EncounterDriver {
    pub fn new(player: Plantmon, enemy: Plantmon) -> Self {
        Self::with_rng(player, enemy, EncounterRng::new_random())
    }

    pub fn with_rng(player: Plantmon, enemy: Plantmon, rng: EncounterRng) -> Self {
        EncounterDriver {
            encounter: Encounter::start(player, enemy),
            rng,
            now_ms: 0,
            busy_until_ms: 0,
            pending: None,
        }
    }

    /// Player input: resolve the skill at `skill_index`.
    ///
    /// A no-op while the driver is busy, while an enemy reply is pending,
    /// or when the engine's own guards reject the step. Returns whether
    /// the step actually resolved.
    pub fn choose_skill(&mut self, skill_index: usize) -> bool {
        if self.is_busy() || self.pending.is_some() {
            return false;
        }
        match self.encounter.resolve_player_step(skill_index, &mut self.rng) {
            StepOutcome::Ignored => false,
            StepOutcome::Resolved { follow_up } => {
                self.busy_until_ms = self.now_ms + STEP_DELAY_MS;
                if let Some(FollowUp::EnemyReply { delay_ms }) = follow_up {
                    self.pending = Some(ScheduledStep {
                        kind: PendingStep::EnemyReply,
                        due_at_ms: self.now_ms + delay_ms,
                    });
                }
                true
            }
        }
    }

    /// Move the virtual clock forward, firing the pending step if its due
    /// time is reached.
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
        let Some(scheduled) = self.pending else {
            return;
        };
        if self.now_ms < scheduled.due_at_ms {
            return;
        }
        self.pending = None;
        match scheduled.kind {
            PendingStep::EnemyReply => {
                if let StepOutcome::Resolved { .. } =
                    self.encounter.resolve_enemy_step(&mut self.rng)
                {
                    self.busy_until_ms = scheduled.due_at_ms + STEP_DELAY_MS;
                }
            }
        }
    }

    /// Drop any pending enemy reply. Called when the battle screen is torn
    /// down; the driver holds no other cancellable work.
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Rematch: fresh creature copies, fresh log, pending work discarded.
    pub fn restart(&mut self, player: Plantmon, enemy: Plantmon) {
        self.encounter = Encounter::start(player, enemy);
        self.pending = None;
        self.busy_until_ms = self.now_ms;
    }

    pub fn is_busy(&self) -> bool {
        self.now_ms < self.busy_until_ms
    }

    pub fn pending_step(&self) -> Option<ScheduledStep> {
        self.pending
    }

    pub fn encounter(&self) -> &Encounter {
        &self.encounter
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }
}
