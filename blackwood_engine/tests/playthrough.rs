mod common;

use blackwood_engine::ending::{Ending, show_ending};
use blackwood_engine::loader::build_blackwood;
use blackwood_engine::room::Exit;
use blackwood_engine::*;

use common::{failures, play, successes};

#[test]
fn perfect_run_through_the_mansion() {
    let mut world = build_blackwood().unwrap();

    // Arm up in the kitchen, then clear the cellar.
    play(&mut world, &["east", "take knife", "take bread", "down"]);
    assert_eq!(world.player.location, "cellar");
    assert_eq!(world.player.health(), 95);
    play(&mut world, &["attack"]);
    assert_eq!(world.player.health(), 85);
    play(&mut world, &["attack"]);
    assert_eq!(world.session.monsters_defeated, 1);
    assert_eq!(world.player.health(), 85);

    // Key in hand, deal with the Shadow Creature.
    play(&mut world, &["take key", "up", "west", "north"]);
    assert_eq!(world.player.location, "living_room");
    assert_eq!(world.player.health(), 78, "ambush damage rounds down");
    play(&mut world, &["attack", "attack"]);
    assert_eq!(world.session.monsters_defeated, 2);
    assert_eq!(world.player.health(), 63);

    // The bedroom opens with the rusty key, and its spirit ambushes at once.
    let view = play(&mut world, &["up"]);
    assert_eq!(successes(&view), vec!["You use the rusty key to unlock the passage!"]);
    assert_eq!(world.player.location, "master_bedroom");
    assert_eq!(world.player.health(), 53);

    play(&mut world, &["attack", "attack"]);
    assert_eq!(world.player.health(), 13);
    play(&mut world, &["use bread"]);
    assert_eq!(world.player.health(), 28);
    play(&mut world, &["attack"]);
    assert_eq!(world.session.monsters_defeated, 3);
    assert_eq!(world.player.health(), 28);

    // Loot the upper floors and head for the library.
    play(&mut world, &["take dagger", "up", "take potion", "use potion"]);
    assert_eq!(world.player.health(), 78);
    play(&mut world, &["down", "down", "south", "west", "take tome"]);
    assert_eq!(world.player.location, "library");
    assert!(world.player.has_item("ancient tome"));

    let view = play(&mut world, &["secret"]);
    assert_eq!(successes(&view), vec!["You use the ancient tome to unlock the passage!"]);
    assert_eq!(world.player.location, "secret_passage");
    assert!(world.in_play());

    play(&mut world, &["exit"]);
    assert!(world.session.has_escaped);
    assert!(!world.in_play());
    assert_eq!(world.player.location, "secret_passage");

    let mut view = View::new();
    assert_eq!(show_ending(&world, &mut view), Ending::Perfect);
    assert!(view.view_items().any(|item| matches!(
        item,
        ViewItem::EndingSummary {
            ending: Ending::Perfect,
            monsters_defeated: 3,
            health: Some(78),
            max_health: 100,
        }
    )));
}

#[test]
fn sneaking_out_without_a_fight_is_plain_escape() {
    let mut world = build_blackwood().unwrap();
    let view = play(&mut world, &["west", "secret"]);
    assert_eq!(failures(&view), vec!["This way is locked. You need something to open it..."]);

    play(&mut world, &["take tome", "secret", "back", "secret", "exit"]);
    assert!(world.session.has_escaped);
    assert_eq!(world.player.health(), 100);
    assert_eq!(Ending::for_world(&world), Ending::Escape);
}

#[test]
fn escaping_after_one_kill_is_good_ending() {
    let mut world = build_blackwood().unwrap();
    play(&mut world, &["east", "take knife", "down", "attack", "attack", "up", "west", "west"]);
    assert_eq!(world.session.monsters_defeated, 1);
    play(&mut world, &["take tome", "go secret", "go exit"]);
    assert_eq!(Ending::for_world(&world), Ending::Good);
}

#[test]
fn dying_ends_the_loop_as_a_loss() {
    let mut world = BlackwoodWorld::new_empty();
    let mut hall = Room::new("hall", "Hall", "Bare boards.");
    hall.add_exit("north", Exit::Room("lair".into()));
    let mut lair = Room::new("lair", "Lair", "Bones everywhere.");
    lair.add_exit("out", Exit::Escape);
    lair.set_enemy(Enemy::new("brute", "Brute", "Huge.", 500, 60));
    world.rooms.insert("hall".into(), hall);
    world.rooms.insert("lair".into(), lair);
    world.player = Player::new("hall", 100);

    play(&mut world, &["north"]);
    assert_eq!(world.player.health(), 70);
    play(&mut world, &["attack"]);
    assert_eq!(world.player.health(), 10);
    assert!(world.in_play());

    play(&mut world, &["attack"]);
    assert_eq!(world.player.health(), -50, "retaliation is not clamped");
    assert!(!world.in_play());
    assert!(!world.session.running);

    let mut view = View::new();
    assert_eq!(show_ending(&world, &mut view), Ending::Loss);
    assert!(view.view_items().any(|item| matches!(
        item,
        ViewItem::EndingSummary { health: None, monsters_defeated: 0, .. }
    )));
}
