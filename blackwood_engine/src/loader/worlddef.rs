//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into runtime engine structs.

use anyhow::{Context, Result, bail};
use blackwood_data::{EnemyDef, ExitTargetDef, ItemDef, LocationRef, RoomDef, WorldDef, validate_world};
use log::info;

use crate::enemy::Enemy;
use crate::item::{Item, ItemEffect, ItemHolder};
use crate::player::Player;
use crate::room::{Exit, Room};
use crate::world::BlackwoodWorld;

/// Parse a `WorldDef` from RON text.
///
/// # Errors
/// - on malformed RON
pub fn parse_worlddef(text: &str) -> Result<WorldDef> {
    ron::from_str(text).context("parsing worlddef RON")
}

/// Convert a `WorldDef` into a populated `BlackwoodWorld`.
///
/// # Errors
/// - if the definition fails validation (all problems are reported together)
pub fn build_world_from_def(def: &WorldDef) -> Result<BlackwoodWorld> {
    validate_worlddef(def)?;
    let mut world = BlackwoodWorld::new_empty();
    world.title.clone_from(&def.game.title);
    world.blurb.clone_from(&def.game.blurb);

    for room_def in &def.rooms {
        let room = room_from_def(room_def);
        world.rooms.insert(room.symbol.clone(), room);
    }

    let max_hp = i32::try_from(def.game.player.max_hp).context("player max hp out of range")?;
    world.player = Player::new(def.game.player.start_room.clone(), max_hp);

    for item_def in &def.items {
        let item = item_from_def(item_def);
        match &item_def.location {
            LocationRef::Inventory => world.player.add_item(item),
            LocationRef::Room(room_id) => world
                .rooms
                .get_mut(room_id)
                .with_context(|| format!("placing item '{}'", item_def.id))?
                .add_item(item),
        }
    }

    for enemy_def in &def.enemies {
        let enemy = enemy_from_def(enemy_def)?;
        world
            .rooms
            .get_mut(&enemy_def.room)
            .with_context(|| format!("placing enemy '{}'", enemy_def.id))?
            .set_enemy(enemy);
    }

    info!("world \"{}\" built from definition", world.title);
    Ok(world)
}

/// Validate the WorldDef and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let errors = validate_world(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("worlddef validation failed:\n{details}");
}

fn room_from_def(def: &RoomDef) -> Room {
    let mut room = Room::new(def.id.clone(), def.name.clone(), def.desc.clone());
    for exit in &def.exits {
        let target = match &exit.to {
            ExitTargetDef::Room(to) => Exit::Room(to.clone()),
            ExitTargetDef::Escape => Exit::Escape,
        };
        room.add_exit(&exit.direction, target);
    }
    if let Some(key) = &def.required_key {
        room.lock_with(key);
    }
    room
}

fn item_from_def(def: &ItemDef) -> Item {
    Item::new(
        def.id.clone(),
        def.name.clone(),
        def.desc.clone(),
        ItemEffect::from(&def.effect),
    )
}

fn enemy_from_def(def: &EnemyDef) -> Result<Enemy> {
    let damage = i32::try_from(def.damage).with_context(|| format!("enemy '{}' damage out of range", def.id))?;
    Ok(Enemy::new(
        def.id.clone(),
        def.name.clone(),
        def.desc.clone(),
        def.health,
        damage,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WorldObject;
    use blackwood_data::{ExitDef, GameDef, ItemEffectDef, PlayerDef};

    fn small_def() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Shed".into(),
                blurb: String::new(),
                player: PlayerDef {
                    start_room: "shed".into(),
                    max_hp: 30,
                },
            },
            rooms: vec![RoomDef {
                id: "shed".into(),
                name: "Shed".into(),
                desc: "Tools everywhere.".into(),
                exits: vec![ExitDef {
                    direction: "Door".into(),
                    to: ExitTargetDef::Escape,
                }],
                required_key: None,
            }],
            items: vec![
                ItemDef {
                    id: "rake".into(),
                    name: "rake".into(),
                    desc: "Pointy.".into(),
                    effect: ItemEffectDef::Weapon { damage: 7 },
                    location: LocationRef::Room("shed".into()),
                },
                ItemDef {
                    id: "apple".into(),
                    name: "apple".into(),
                    desc: "Crisp.".into(),
                    effect: ItemEffectDef::Heal {
                        amount: 5,
                        message: None,
                    },
                    location: LocationRef::Inventory,
                },
            ],
            enemies: vec![EnemyDef {
                id: "wasp".into(),
                name: "Wasp".into(),
                desc: "Buzzing.".into(),
                health: 3,
                damage: 2,
                room: "shed".into(),
            }],
        }
    }

    #[test]
    fn builds_rooms_items_enemies_and_player() {
        let world = build_world_from_def(&small_def()).expect("valid definition");
        let shed = &world.rooms["shed"];
        assert_eq!(shed.exit("door"), Some(&Exit::Escape));
        assert_eq!(shed.items().len(), 1);
        assert_eq!(shed.enemy().map(Enemy::name), Some("Wasp"));
        assert_eq!(world.player.location, "shed");
        assert_eq!(world.player.max_health(), 30);
        assert!(world.player.has_item("apple"));
    }

    #[test]
    fn invalid_definition_reports_every_problem() {
        let mut def = small_def();
        def.game.player.start_room = "barn".into();
        def.items[0].location = LocationRef::Room("loft".into());
        let err = build_world_from_def(&def).expect_err("invalid definition").to_string();
        assert!(err.contains("validation failed"));
        assert!(err.contains("'barn'"));
        assert!(err.contains("'loft'"));
    }

    #[test]
    fn parses_ron_text() {
        let text = r#"(
            game: (title: "Tiny", player: (start_room: "a")),
            rooms: [(id: "a", name: "A", desc: "Just a.", exits: [(direction: "out", to: Escape)])],
        )"#;
        let def = parse_worlddef(text).expect("valid RON");
        assert_eq!(def.game.player.max_hp, 100);
        assert_eq!(def.rooms[0].exits[0].to, ExitTargetDef::Escape);
        assert!(build_world_from_def(&def).is_ok());
    }
}
