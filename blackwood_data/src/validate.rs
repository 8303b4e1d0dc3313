use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in a WorldDef.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
    UnreachableKey { room: String, key: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
            ValidationError::UnreachableKey { room, key } => {
                write!(f, "room '{room}' is locked by '{key}', which can never be obtained")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in a WorldDef.
///
/// ```
/// use blackwood_data::*;
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         blurb: String::new(),
///         player: PlayerDef {
///             start_room: "start".into(),
///             max_hp: 100,
///         },
///     },
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         name: "Start".into(),
///         desc: "A room.".into(),
///         exits: vec![ExitDef {
///             direction: "exit".into(),
///             to: ExitTargetDef::Escape,
///         }],
///         required_key: None,
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut items = HashSet::new();
    let mut enemies = HashSet::new();

    track_ids(
        "room",
        world.rooms.iter().map(|r| r.id.as_str()),
        &mut rooms,
        &mut errors,
    );
    track_ids(
        "item",
        world.items.iter().map(|i| i.id.as_str()),
        &mut items,
        &mut errors,
    );
    track_ids(
        "enemy",
        world.enemies.iter().map(|e| e.id.as_str()),
        &mut enemies,
        &mut errors,
    );

    if world.game.player.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game player start room missing".to_string(),
        });
    } else {
        check_ref(
            "room",
            &world.game.player.start_room,
            &rooms,
            "game player start room".to_string(),
            &mut errors,
        );
    }

    if world.game.player.max_hp == 0 {
        errors.push(ValidationError::InvalidValue {
            context: "player max hp is zero".to_string(),
        });
    }

    let item_names: HashSet<String> = world.items.iter().map(|i| fold_name(&i.name)).collect();
    let mut escape_count = 0;

    for room in &world.rooms {
        let mut directions = HashSet::new();
        for exit in &room.exits {
            if !directions.insert(exit.direction.to_lowercase()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' has more than one '{}' exit", room.id, exit.direction),
                });
            }
            match &exit.to {
                ExitTargetDef::Room(to) => check_ref(
                    "room",
                    to,
                    &rooms,
                    format!("room '{}' exit '{}'", room.id, exit.direction),
                    &mut errors,
                ),
                ExitTargetDef::Escape => escape_count += 1,
            }
        }
        if let Some(key) = &room.required_key {
            if key.trim().is_empty() {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' is locked with an empty key name", room.id),
                });
            } else if !item_names.contains(&fold_name(key)) {
                errors.push(ValidationError::MissingReference {
                    kind: "item",
                    id: key.clone(),
                    context: format!("key for locked room '{}'", room.id),
                });
            }
        }
    }

    if escape_count == 0 {
        errors.push(ValidationError::InvalidValue {
            context: "no exit leads out of the world".to_string(),
        });
    }

    for item in &world.items {
        if let LocationRef::Room(room) = &item.location {
            check_ref("room", room, &rooms, format!("item '{}'", item.id), &mut errors);
        }
        match &item.effect {
            ItemEffectDef::Weapon { damage: 0 } => errors.push(ValidationError::InvalidValue {
                context: format!("weapon '{}' deals no damage", item.id),
            }),
            ItemEffectDef::Heal { amount: 0, .. } => errors.push(ValidationError::InvalidValue {
                context: format!("healing item '{}' heals nothing", item.id),
            }),
            _ => {},
        }
    }

    let mut occupied = HashSet::new();
    for enemy in &world.enemies {
        check_ref("room", &enemy.room, &rooms, format!("enemy '{}'", enemy.id), &mut errors);
        if !occupied.insert(enemy.room.as_str()) {
            errors.push(ValidationError::InvalidValue {
                context: format!("room '{}' holds more than one enemy", enemy.room),
            });
        }
        if enemy.health <= 0 {
            errors.push(ValidationError::InvalidValue {
                context: format!("enemy '{}' starts dead ({} hp)", enemy.id, enemy.health),
            });
        }
    }

    if errors.is_empty() {
        check_key_reachability(world, &mut errors);
    }

    errors
}

/// Walk the room graph from the start, collecting every item along the way and
/// opening locked rooms once their key has been collected. Any locked room that
/// stays shut when nothing more can be collected is reported.
fn check_key_reachability(world: &WorldDef, errors: &mut Vec<ValidationError>) {
    let rooms: HashMap<&str, &RoomDef> = world.rooms.iter().map(|r| (r.id.as_str(), r)).collect();
    let mut held: HashSet<String> = world
        .items
        .iter()
        .filter(|i| matches!(i.location, LocationRef::Inventory))
        .map(|i| fold_name(&i.name))
        .collect();

    let mut visited: HashSet<&str> = HashSet::new();
    loop {
        visited.clear();
        let mut queue = VecDeque::from([world.game.player.start_room.as_str()]);
        while let Some(room_id) = queue.pop_front() {
            if !visited.insert(room_id) {
                continue;
            }
            let Some(room) = rooms.get(room_id) else {
                continue;
            };
            for exit in &room.exits {
                if let ExitTargetDef::Room(to) = &exit.to
                    && let Some(dest) = rooms.get(to.as_str())
                {
                    let open = dest
                        .required_key
                        .as_ref()
                        .is_none_or(|key| held.contains(&fold_name(key)));
                    if open {
                        queue.push_back(dest.id.as_str());
                    }
                }
            }
        }

        let before = held.len();
        for item in &world.items {
            if let LocationRef::Room(room) = &item.location
                && visited.contains(room.as_str())
            {
                held.insert(fold_name(&item.name));
            }
        }
        if held.len() == before {
            break;
        }
    }

    for room in &world.rooms {
        if let Some(key) = &room.required_key
            && !held.contains(&fold_name(key))
        {
            errors.push(ValidationError::UnreachableKey {
                room: room.id.clone(),
                key: key.clone(),
            });
        }
    }
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

/// Case-folded form of an item name. Keys match their locks when the folded names are equal.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}
