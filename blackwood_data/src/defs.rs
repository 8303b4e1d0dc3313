use serde::{Deserialize, Serialize};

/// Stable identifier used across WorldDef references.
pub type Id = String;

/// Top-level world data loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WorldDef {
    pub game: GameDef,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub enemies: Vec<EnemyDef>,
}

/// Game-level metadata and startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDef {
    pub title: String,
    #[serde(default)]
    pub blurb: String,
    pub player: PlayerDef,
}

/// Starting conditions for the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDef {
    pub start_room: Id,
    #[serde(default = "default_max_hp")]
    pub max_hp: u32,
}

impl Default for PlayerDef {
    fn default() -> Self {
        Self {
            start_room: String::new(),
            max_hp: default_max_hp(),
        }
    }
}

fn default_max_hp() -> u32 {
    100
}

/// Room definition used by the engine at load time.
///
/// A room with `required_key` set starts locked; the key is the display name of
/// the item that opens it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub exits: Vec<ExitDef>,
    #[serde(default)]
    pub required_key: Option<String>,
}

/// Exit metadata for room navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExitDef {
    pub direction: String,
    pub to: ExitTargetDef,
}

/// Where an exit leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitTargetDef {
    Room(Id),
    /// Leaving the mansion: taking this exit ends the game in escape.
    Escape,
}

/// Item definition used by the engine at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub effect: ItemEffectDef,
    pub location: LocationRef,
}

/// What an item does when wielded or used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemEffectDef {
    #[default]
    Passive,
    Weapon {
        damage: u32,
    },
    Heal {
        amount: u32,
        #[serde(default)]
        message: Option<String>,
    },
}

/// Authoring-time reference to an item's starting location.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LocationRef {
    Inventory,
    Room(Id),
}

/// Enemy definition. Each enemy is bound to one room for the whole game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyDef {
    pub id: Id,
    pub name: String,
    pub desc: String,
    pub health: i32,
    pub damage: u32,
    pub room: Id,
}
