use serde::{Deserialize, Serialize};

/// Result of an encounter. `Win` and `Lose` are terminal: once entered,
/// no further transitions fire.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win,
    Lose,
}

/// Whichever side is entitled to resolve the next skill.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnSide {
    Player,
    Enemy,
}

impl TurnSide {
    pub fn other(self) -> TurnSide {
        match self {
            TurnSide::Player => TurnSide::Enemy,
            TurnSide::Enemy => TurnSide::Player,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum BattleEvent {
    // Encounter start
    WildAppeared { enemy: String },
    PlayerSent { player: String },

    // Skill resolution, two events per resolution
    SkillUsed { attacker: String, skill: String },
    DamageDealt {
        defender: String,
        damage: u16,
        remaining_health: u16,
    },

    // Terminal transition
    CreatureDefeated { name: String },
    EncounterEnded { outcome: Outcome },
}

impl BattleEvent {
    /// Formats the event into the human-readable battle log line.
    pub fn format(&self) -> String {
        match self {
            BattleEvent::WildAppeared { enemy } => format!("A wild {} appeared!", enemy),
            BattleEvent::PlayerSent { player } => format!("Go, {}!", player),
            BattleEvent::SkillUsed { attacker, skill } => {
                format!("{} used {}!", attacker, skill)
            }
            BattleEvent::DamageDealt { defender, damage, .. } => {
                format!("Dealt {} damage to {}!", damage, defender)
            }
            BattleEvent::CreatureDefeated { name } => {
                format!("{} can no longer fight!", name)
            }
            BattleEvent::EncounterEnded { outcome } => match outcome {
                Outcome::Win => "You won!".to_string(),
                Outcome::Lose => "You lost...".to_string(),
                Outcome::Ongoing => "The battle rages on!".to_string(),
            },
        }
    }
}

/// Append-only ordered log of everything that happened in an encounter.
///
/// The engine never truncates it; trimming the display to the last N lines
/// is a presentation concern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventBus {
    events: Vec<BattleEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, event: BattleEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[BattleEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// The formatted log, one line per event, oldest first.
    pub fn log_lines(&self) -> Vec<String> {
        self.events.iter().map(BattleEvent::format).collect()
    }

    /// Print the formatted log with indentation.
    pub fn print_formatted(&self) {
        for line in self.log_lines() {
            println!("  {}", line);
        }
    }
}

impl std::fmt::Display for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.log_lines() {
            writeln!(f, "  {}", line)?;
        }
        Ok(())
    }
}

/// RNG oracle for an encounter.
///
/// Production encounters pre-roll uniform outcomes from `rand` and refill
/// when they run out; tests script the exact outcome sequence and panic on
/// exhaustion so a test that consumes more randomness than it budgeted for
/// fails loudly.
#[derive(Debug, Clone)]
pub struct EncounterRng {
    outcomes: Vec<u8>,
    index: usize,
    scripted: bool,
}

impl EncounterRng {
    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        Self {
            outcomes,
            index: 0,
            scripted: true,
        }
    }

    pub fn new_random() -> Self {
        Self {
            outcomes: Self::roll_batch(),
            index: 0,
            scripted: false,
        }
    }

    fn roll_batch() -> Vec<u8> {
        use rand::Rng;
        let mut rng = rand::rng();
        (0..100).map(|_| rng.random_range(1..=100)).collect()
    }

    /// Draw the next raw outcome in `1..=100`.
    pub fn next_outcome(&mut self, reason: &str) -> u8 {
        if self.index >= self.outcomes.len() {
            if self.scripted {
                panic!(
                    "EncounterRng exhausted! Tried to get a value for: '{}'. Need more scripted values.",
                    reason
                );
            }
            self.outcomes = Self::roll_batch();
            self.index = 0;
        }
        let outcome = self.outcomes[self.index];
        self.index += 1;
        outcome
    }

    /// Damage randomization factor, uniform in `[0.8, 1.2)`.
    pub fn damage_factor(&mut self) -> f64 {
        let outcome = self.next_outcome("damage factor");
        0.8 + (outcome - 1) as f64 / 100.0 * 0.4
    }

    /// Uniform index draw in `0..len`. Rejection sampling keeps the draw
    /// uniform when `len` does not divide 100.
    pub fn pick_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0 && len <= 100);
        let limit = 100 - 100 % len;
        loop {
            let outcome = (self.next_outcome("skill choice") - 1) as usize;
            if outcome < limit {
                return outcome % len;
            }
        }
    }
}
