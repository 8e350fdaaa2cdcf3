//! End-to-end turn sessions over a persisted world.

use tabletop_character::domain::character::Character;
use tabletop_character::domain::stats::{Stat, Stats};
use tabletop_inventory::domain::item::{DURABILITY, Item, ItemInstance};
use tabletop_session::application::command_handlers::{handle_advance_turn, handle_start_turns};
use tabletop_session::application::query_handlers::{TurnRow, get_turn_order};
use tabletop_session::domain::commands::{AdvanceTurn, StartTurns};
use tabletop_session::domain::turn::delay_for;
use tabletop_test_support::InMemorySnapshotRepository;
use tabletop_world::application::persistence::{load_world, save_world};
use tabletop_world::domain::place::Place;
use tabletop_world::domain::world::World;
use uuid::Uuid;

fn start(place: &str) -> StartTurns {
    StartTurns {
        correlation_id: Uuid::new_v4(),
        place: place.to_owned(),
    }
}

fn advance() -> AdvanceTurn {
    AdvanceTurn {
        correlation_id: Uuid::new_v4(),
    }
}

fn row(name: &str, delay: i32) -> TurnRow {
    TurnRow {
        name: name.to_owned(),
        delay,
    }
}

#[test]
fn test_worked_example_survives_save_and_load() {
    // Arrange
    let mut world = World::new();
    world
        .items
        .add(Item::new("Sword").with_property(DURABILITY, 10));
    let mut aria = Character::new("Aria")
        .with_stats(Stats::new(5, 5, 5, 5, 5))
        .filled();
    aria.give_item(ItemInstance::new("Sword", 1, 10));
    world.party.characters.add(aria);
    world.places.add(Place::new("Road"));

    let repo = InMemorySnapshotRepository::new();
    save_world(&repo, &world).unwrap();

    // Act
    let loaded = load_world(&repo).unwrap();
    let mut scheduler = handle_start_turns(&start("Road"), &loaded).unwrap();
    let seeded = get_turn_order(&scheduler);
    let actor = handle_advance_turn(&advance(), &mut scheduler).unwrap();

    // Assert
    let aria = loaded.party.characters.lookup("Aria").unwrap();
    assert_eq!(aria.body, 13);
    assert_eq!(aria.mind, 13);
    assert_eq!(aria.items[0].max_durability(), 10);
    assert_eq!(seeded, vec![row("Aria", 100)]);
    assert_eq!(actor.name, "Aria");
    assert_eq!(get_turn_order(&scheduler), vec![row("Aria", 100)]);
}

#[test]
fn test_session_reflects_stat_edits_only_after_restart() {
    // Arrange
    let mut world = World::new();
    world
        .party
        .characters
        .add(Character::new("Aria").with_stats(Stats::new(5, 5, 5, 5, 5)));
    world.places.add(
        Place::new("Inn")
            .with_character(Character::new("Bram").with_stats(Stats::new(5, 2, 5, 5, 4))),
    );

    {
        let scheduler = handle_start_turns(&start("Inn"), &world).unwrap();
        assert_eq!(
            get_turn_order(&scheduler),
            vec![row("Aria", 100), row("Bram", 125)]
        );
    }

    // Act
    world
        .party
        .characters
        .lookup_mut("Aria")
        .unwrap()
        .set_stat(Stat::Ntu, 2);
    let scheduler = handle_start_turns(&start("Inn"), &world).unwrap();

    // Assert
    assert_eq!(
        get_turn_order(&scheduler),
        vec![row("Bram", 125), row("Aria", 250)]
    );
}

#[test]
fn test_many_advances_keep_delays_non_negative_and_sorted() {
    let mut world = World::new();
    for (name, dex, ntu) in [("A", 3, 7), ("B", 9, 2), ("C", 5, 5), ("D", 1, 1)] {
        world
            .party
            .characters
            .add(Character::new(name).with_stats(Stats::new(5, dex, 5, 5, ntu)));
    }
    world.places.add(Place::new("Arena"));
    let mut scheduler = handle_start_turns(&start("Arena"), &world).unwrap();

    for _ in 0..50 {
        let before: Vec<i32> = scheduler.order().map(|(_, delay)| delay).collect();
        let minimum = before[0];
        let actor = scheduler.advance().unwrap();
        let after = get_turn_order(&scheduler);

        let acted = after.iter().find(|r| r.name == actor.name).unwrap();
        assert_eq!(acted.delay, delay_for(actor.stats.dexterity));
        let drained: i32 = before.iter().sum::<i32>() - minimum * 4;
        assert_eq!(
            after.iter().map(|r| r.delay).sum::<i32>(),
            drained + acted.delay
        );
        assert!(after.windows(2).all(|pair| pair[0].delay <= pair[1].delay));
        assert!(after.iter().all(|r| r.delay >= 0));
    }
}
