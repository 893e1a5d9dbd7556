#[cfg(test)]
mod tests {
    use crate::battle::engine::{Encounter, FollowUp, StepOutcome};
    use crate::battle::state::{EncounterRng, Outcome, TurnSide};
    use crate::battle::tests::common::TestCreatureBuilder;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_shot_victory_scenario() {
        // 100-HP player with a 100-damage skill against an 80-HP enemy:
        // even the weakest roll (floor(0.8 * 100) = 80) finishes it.
        let player = TestCreatureBuilder::new("p", "Flame Blossom")
            .with_skill("Overgrowth", 100)
            .with_max_health(100)
            .build();
        let enemy = TestCreatureBuilder::new("e", "Wild Flare Newt")
            .with_skill("Flame Burst", 25)
            .with_max_health(80)
            .build();

        let mut rng = EncounterRng::new_random();
        let mut encounter = Encounter::start(player, enemy);
        let outcome = encounter.resolve_player_step(0, &mut rng);

        assert_eq!(outcome, StepOutcome::Resolved { follow_up: None });
        assert_eq!(encounter.enemy.health, 0);
        assert_eq!(encounter.outcome, Outcome::Win);
        assert!(encounter.is_over());

        let lines = encounter.log_lines();
        assert_eq!(lines.last().unwrap(), "You won!");
        assert_eq!(
            lines[lines.len() - 2],
            "Wild Flare Newt can no longer fight!"
        );
    }

    #[test]
    fn player_defeat_takes_precedence_when_both_reach_zero() {
        let player = TestCreatureBuilder::new("p", "P")
            .with_skill("Strike", 20)
            .build();
        let enemy = TestCreatureBuilder::new("e", "E")
            .with_skill("Strike", 20)
            .build();

        let mut encounter = Encounter::start(player, enemy);
        encounter.player.health = 0;
        encounter.enemy.health = 0;
        assert!(encounter.check_terminal());

        assert_eq!(encounter.outcome, Outcome::Lose);
        assert_eq!(encounter.log_lines().last().unwrap(), "You lost...");
    }

    #[test]
    fn terminal_state_is_absorbing() {
        let player = TestCreatureBuilder::new("p", "P")
            .with_skill("Strike", 20)
            .build();
        let enemy = TestCreatureBuilder::new("e", "E")
            .with_skill("Strike", 20)
            .build();

        let mut encounter = Encounter::start(player, enemy);
        encounter.enemy.health = 0;
        assert!(encounter.check_terminal());
        assert_eq!(encounter.outcome, Outcome::Win);

        // A later health change must not re-fire the transition
        let events_after_win = encounter.events.len();
        encounter.player.health = 0;
        assert!(encounter.check_terminal());
        assert_eq!(encounter.outcome, Outcome::Win);
        assert_eq!(encounter.events.len(), events_after_win);
    }

    #[test]
    fn every_resolution_appends_exactly_two_log_lines() {
        let player = TestCreatureBuilder::new("p", "Flame Blossom")
            .with_skill("Flame Burst", 25)
            .build();
        let enemy = TestCreatureBuilder::new("e", "Wild Frost Bloom")
            .with_skill("Water Jet", 20)
            .with_max_health(500)
            .build();

        // One value for the player's roll, one for the enemy's skill
        // choice, one for the enemy's roll.
        let mut rng = EncounterRng::new_for_test(vec![51, 7, 51]);
        let mut encounter = Encounter::start(player, enemy);
        assert_eq!(encounter.events.len(), 2); // the two opening lines

        encounter.resolve_player_step(0, &mut rng);
        assert_eq!(encounter.events.len(), 4);
        let lines = encounter.log_lines();
        assert_eq!(lines[2], "Flame Blossom used Flame Burst!");
        assert_eq!(lines[3], "Dealt 25 damage to Wild Frost Bloom!");

        encounter.resolve_enemy_step(&mut rng);
        assert_eq!(encounter.events.len(), 6);
        let lines = encounter.log_lines();
        assert_eq!(lines[4], "Wild Frost Bloom used Water Jet!");
        assert_eq!(lines[5], "Dealt 20 damage to Flame Blossom!");
    }

    #[test]
    fn full_encounter_alternates_until_victory() {
        // Factor 1.0 rolls throughout: the player deals 30 per hit, the
        // enemy 25. The enemy falls on the third player hit.
        let player = TestCreatureBuilder::new("p", "Thunder Fern")
            .with_skill("Static Shock", 30)
            .with_max_health(100)
            .build();
        let enemy = TestCreatureBuilder::new("e", "Wild Flare Newt")
            .with_skill("Flame Burst", 25)
            .with_max_health(80)
            .build();

        let mut rng = EncounterRng::new_for_test(vec![51, 7, 51, 51, 7, 51, 51]);
        let mut encounter = Encounter::start(player, enemy);

        // Round 1
        let step = encounter.resolve_player_step(0, &mut rng);
        assert!(matches!(
            step,
            StepOutcome::Resolved {
                follow_up: Some(FollowUp::EnemyReply { .. })
            }
        ));
        assert_eq!(encounter.turn, TurnSide::Enemy);
        encounter.resolve_enemy_step(&mut rng);
        assert_eq!(encounter.turn, TurnSide::Player);
        assert_eq!(encounter.enemy.health, 50);
        assert_eq!(encounter.player.health, 75);

        // Round 2
        encounter.resolve_player_step(0, &mut rng);
        encounter.resolve_enemy_step(&mut rng);
        assert_eq!(encounter.enemy.health, 20);
        assert_eq!(encounter.player.health, 50);

        // Round 3: the player's hit is terminal, no follow-up scheduled
        let step = encounter.resolve_player_step(0, &mut rng);
        assert_eq!(step, StepOutcome::Resolved { follow_up: None });
        assert_eq!(encounter.enemy.health, 0);
        assert_eq!(encounter.outcome, Outcome::Win);
        assert_eq!(encounter.player.health, 50);
    }
}
