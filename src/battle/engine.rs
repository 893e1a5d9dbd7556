use crate::battle::state::{BattleEvent, EncounterRng, EventBus, Outcome, TurnSide};
use crate::creature::{Plantmon, Skill};

/// Delay before the automatic enemy reply fires after a player move, in
/// virtual milliseconds. Cosmetic; models the attack animation sequence.
pub const ENEMY_REPLY_DELAY_MS: u64 = 1500;

/// What the engine wants done next after a resolution. The driver turns
/// the relative delay into an absolute due time on its own clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    EnemyReply { delay_ms: u64 },
}

/// Result of invoking one resolution step.
///
/// Invalid invocations (terminal state, stale turn, out-of-range skill
/// index) are reported as `Ignored`, never as errors: the worst case is
/// the encounter staying exactly where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Resolved { follow_up: Option<FollowUp> },
    Ignored,
}

/// One battle run from `Ongoing` to `Win` or `Lose`.
///
/// Operates on disposable copies of both creatures; nothing here ever
/// propagates back to the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Encounter {
    pub player: Plantmon,
    pub enemy: Plantmon,
    pub turn: TurnSide,
    pub outcome: Outcome,
    pub events: EventBus,
}

impl Encounter {
    /// Seed an encounter with the two creature copies, player to move first.
    ///
    /// The caller guarantees a player creature exists; a battle is never
    /// constructed without an active selection upstream.
    pub fn start(player: Plantmon, enemy: Plantmon) -> Self {
        let mut events = EventBus::new();
        events.push(BattleEvent::WildAppeared {
            enemy: enemy.name.clone(),
        });
        events.push(BattleEvent::PlayerSent {
            player: player.name.clone(),
        });

        Encounter {
            player,
            enemy,
            turn: TurnSide::Player,
            outcome: Outcome::Ongoing,
            events,
        }
    }

    /// Resolve the caller-chosen skill on the player's turn.
    ///
    /// On a non-terminal resolution the turn flips to the enemy and the
    /// returned follow-up schedules the automatic reply.
    pub fn resolve_player_step(
        &mut self,
        skill_index: usize,
        rng: &mut EncounterRng,
    ) -> StepOutcome {
        if self.outcome != Outcome::Ongoing || self.turn != TurnSide::Player {
            return StepOutcome::Ignored;
        }
        let Some(skill) = self.player.skill(skill_index).cloned() else {
            return StepOutcome::Ignored;
        };

        self.resolve_hit(TurnSide::Player, &skill, rng);

        if self.check_terminal() {
            StepOutcome::Resolved { follow_up: None }
        } else {
            self.turn = TurnSide::Enemy;
            StepOutcome::Resolved {
                follow_up: Some(FollowUp::EnemyReply {
                    delay_ms: ENEMY_REPLY_DELAY_MS,
                }),
            }
        }
    }

    /// Resolve the enemy's reply: a skill chosen uniformly at random from
    /// its skill list. No AI beyond the uniform choice.
    pub fn resolve_enemy_step(&mut self, rng: &mut EncounterRng) -> StepOutcome {
        if self.outcome != Outcome::Ongoing || self.turn != TurnSide::Enemy {
            return StepOutcome::Ignored;
        }
        let index = rng.pick_index(self.enemy.skills.len());
        let skill = self.enemy.skills[index].clone();

        self.resolve_hit(TurnSide::Enemy, &skill, rng);

        if !self.check_terminal() {
            self.turn = TurnSide::Player;
        }
        StepOutcome::Resolved { follow_up: None }
    }

    /// Apply one skill resolution: randomized damage to the defender plus
    /// the two log events every resolution produces.
    fn resolve_hit(&mut self, attacker: TurnSide, skill: &Skill, rng: &mut EncounterRng) {
        let factor = rng.damage_factor();
        let damage = (skill.damage as f64 * factor).floor() as u16;

        let attacker_name = match attacker {
            TurnSide::Player => self.player.name.clone(),
            TurnSide::Enemy => self.enemy.name.clone(),
        };
        let defender = match attacker {
            TurnSide::Player => &mut self.enemy,
            TurnSide::Enemy => &mut self.player,
        };

        defender.take_damage(damage);
        let defender_name = defender.name.clone();
        let remaining_health = defender.health;

        self.events.push(BattleEvent::SkillUsed {
            attacker: attacker_name,
            skill: skill.name.clone(),
        });
        self.events.push(BattleEvent::DamageDealt {
            defender: defender_name,
            damage,
            remaining_health,
        });
    }

    /// Evaluate the terminal transition after a health change.
    ///
    /// Player defeat is checked first: if both creatures stand at zero
    /// after one resolution, the result is a loss.
    pub(crate) fn check_terminal(&mut self) -> bool {
        if self.outcome != Outcome::Ongoing {
            return true;
        }
        if self.player.is_defeated() {
            self.outcome = Outcome::Lose;
            self.events.push(BattleEvent::CreatureDefeated {
                name: self.player.name.clone(),
            });
            self.events.push(BattleEvent::EncounterEnded {
                outcome: Outcome::Lose,
            });
            true
        } else if self.enemy.is_defeated() {
            self.outcome = Outcome::Win;
            self.events.push(BattleEvent::CreatureDefeated {
                name: self.enemy.name.clone(),
            });
            self.events.push(BattleEvent::EncounterEnded {
                outcome: Outcome::Win,
            });
            true
        } else {
            false
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::Ongoing
    }

    pub fn log_lines(&self) -> Vec<String> {
        self.events.log_lines()
    }
}
