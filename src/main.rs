use plantmon_adventure::battle::driver::{EncounterDriver, STEP_DELAY_MS};
use plantmon_adventure::battle::engine::ENEMY_REPLY_DELAY_MS;
use plantmon_adventure::battle::state::Outcome;
use plantmon_adventure::collection::Collection;
use plantmon_adventure::creature::capture_id;
use plantmon_adventure::wild::WildPool;
use std::path::Path;

fn main() {
    let starters = match WildPool::load(Path::new("data/starters")) {
        Ok(pool) => pool,
        Err(e) => {
            println!("Error loading starter pool: {}", e);
            return;
        }
    };
    let wild = match WildPool::load(Path::new("data/wild")) {
        Ok(pool) => pool,
        Err(e) => {
            println!("Error loading wild pool: {}", e);
            return;
        }
    };
    println!(
        "Loaded {} starter and {} wild creature definitions",
        starters.len(),
        wild.len()
    );

    // Simulate the capture flow: two captures, then pick the second for battle
    let mut collection = Collection::new();
    println!("First time? {}", collection.is_first_time());

    let first = starters.random_capture(capture_id(1_754_000_000_000), 1_754_000_000_000);
    let second = starters.random_capture(capture_id(1_754_000_060_000), 1_754_000_060_000);
    println!("Captured {} and {}!", first.name, second.name);

    let battle_pick = second.id.clone();
    collection.add_creature(first);
    collection.add_creature(second);
    collection.set_active(&battle_pick);

    println!("Collection has {} creatures:", collection.len());
    for creature in collection.creatures() {
        let marker = if creature.is_active { " (active)" } else { "" };
        println!(
            "  {} - HP {}/{}{}",
            creature.name, creature.health, creature.max_health, marker
        );
    }

    // Snapshot round trip, the shape a persistence layer would use
    match collection.to_json() {
        Ok(json) => match Collection::from_json(&json) {
            Ok(_) => println!("Snapshot round trip ok ({} bytes of state)", json.len()),
            Err(e) => println!("Snapshot load failed: {}", e),
        },
        Err(e) => println!("Snapshot save failed: {}", e),
    }

    println!();
    println!("=== Battle Demo ===");
    run_battle_demo(&collection, &wild);
}

fn run_battle_demo(collection: &Collection, wild: &WildPool) {
    // The battle screen only ever starts with an active selection
    let Some(active) = collection.active_creature() else {
        println!("No active creature selected - nothing to battle with.");
        return;
    };

    // The encounter works on a disposable copy; the collection is untouched
    let mut driver = EncounterDriver::new(active.clone(), wild.random_enemy());

    let mut rounds = 0;
    while !driver.encounter().is_over() && rounds < 50 {
        // Always pick the first skill, then fast-forward past the reply
        driver.choose_skill(0);
        driver.advance(ENEMY_REPLY_DELAY_MS + STEP_DELAY_MS);
        rounds += 1;
    }

    println!("Battle log:");
    driver.encounter().events.print_formatted();
    println!();

    match driver.encounter().outcome {
        Outcome::Win => println!("{} did great out there!", driver.encounter().player.name),
        Outcome::Lose => println!(
            "{} needs more training...",
            driver.encounter().player.name
        ),
        Outcome::Ongoing => println!("Battle hit the round limit - ending demo"),
    }
    println!(
        "Collection copy still at full health: {}/{}",
        active.health, active.max_health
    );
}
