//! Room definitions and navigation helpers.
//!
//! Rooms are the nodes of the mansion graph. Exits refer to other rooms by id, so
//! the graph may contain cycles and one-way passages without any room owning
//! another. A room may be locked, in which case entering it requires carrying the
//! named key; once opened it stays open.

use crate::{
    Enemy, ItemHolder, View, ViewItem, WorldObject,
    item::Item,
    view::{ExitLine, ItemLine},
    world::{BlackwoodWorld, Id, WorldError},
};
use anyhow::Result;
use std::collections::BTreeMap;

/// Where an exit leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    /// Another room in the mansion.
    Room(Id),
    /// Out of the mansion. Taking it ends the game.
    Escape,
}

/// Whether a room can currently be entered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LockState {
    #[default]
    Unlocked,
    /// Entry requires an inventory item with this exact (case-insensitive) name.
    Locked { key: String },
}

/// Any visitable location in the mansion.
#[derive(Debug, Clone)]
pub struct Room {
    pub symbol: Id,
    pub name: String,
    pub description: String,
    pub visited: bool,
    exits: BTreeMap<String, Exit>,
    items: Vec<Item>,
    enemy: Option<Enemy>,
    lock: LockState,
}
impl WorldObject for Room {
    fn symbol(&self) -> &str {
        &self.symbol
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> &str {
        &self.description
    }
}
impl ItemHolder for Room {
    fn items(&self) -> &[Item] {
        &self.items
    }
    fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.items
    }
}
impl Room {
    pub fn new(symbol: impl Into<Id>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            description: description.into(),
            visited: false,
            exits: BTreeMap::new(),
            items: Vec::new(),
            enemy: None,
            lock: LockState::Unlocked,
        }
    }

    /// Add (or replace) an exit. Directions are stored lower-cased.
    pub fn add_exit(&mut self, direction: &str, exit: Exit) {
        self.exits.insert(direction.to_lowercase(), exit);
    }

    /// Look up an exit by direction, ignoring case.
    pub fn exit(&self, direction: &str) -> Option<&Exit> {
        self.exits.get(&direction.to_lowercase())
    }

    pub fn is_locked(&self) -> bool {
        matches!(self.lock, LockState::Locked { .. })
    }

    /// Name of the key item, if the room is still locked.
    pub fn required_key(&self) -> Option<&str> {
        match &self.lock {
            LockState::Locked { key } => Some(key),
            LockState::Unlocked => None,
        }
    }

    /// Lock the room behind the named key. An empty key name leaves it unlocked.
    pub fn lock_with(&mut self, key: &str) {
        let key = key.trim();
        if !key.is_empty() {
            self.lock = LockState::Locked { key: key.to_string() };
        }
    }

    /// Open the room for good.
    pub fn unlock(&mut self) {
        self.lock = LockState::Unlocked;
    }

    /// Bind an enemy to this room. Only done while building the world.
    pub fn set_enemy(&mut self, enemy: Enemy) {
        self.enemy = Some(enemy);
    }

    /// The room's enemy, dead or alive.
    pub fn enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref()
    }

    /// The room's enemy, but only while it still lives.
    pub fn living_enemy(&self) -> Option<&Enemy> {
        self.enemy.as_ref().filter(|e| e.is_alive())
    }

    pub fn living_enemy_mut(&mut self) -> Option<&mut Enemy> {
        self.enemy.as_mut().filter(|e| e.is_alive())
    }

    /// Displays full description, enemy warning, items and exits for the `Room`.
    ///
    /// # Errors
    /// Returns an error if an exit refers to a room that does not exist.
    pub fn show(&self, world: &BlackwoodWorld, view: &mut View) -> Result<()> {
        view.push(ViewItem::RoomDescription {
            name: self.name.clone(),
            description: self.description.clone(),
        });
        if let Some(enemy) = self.living_enemy() {
            view.push(ViewItem::EnemyWarning(enemy.description().to_string()));
        }
        if !self.items.is_empty() {
            view.push(ViewItem::RoomItems(
                self.items
                    .iter()
                    .map(|item| ItemLine {
                        name: item.name().to_string(),
                        description: item.description().to_string(),
                    })
                    .collect(),
            ));
        }
        self.show_exits(world, view)?;
        Ok(())
    }

    /// Displays list of available exits from the Room.
    ///
    /// # Errors
    /// Returns an error if a referenced destination room cannot be found.
    pub fn show_exits(&self, world: &BlackwoodWorld, view: &mut View) -> Result<()> {
        let mut exit_lines = Vec::new();
        for (direction, exit) in &self.exits {
            let line = match exit {
                Exit::Room(to) => {
                    let target = world.rooms.get(to).ok_or_else(|| WorldError::UnknownRoom(to.clone()))?;
                    ExitLine {
                        direction: direction.clone(),
                        destination: Some(target.name.clone()),
                        locked: target.is_locked(),
                        visited: target.visited,
                    }
                },
                Exit::Escape => ExitLine {
                    direction: direction.clone(),
                    destination: None,
                    locked: false,
                    visited: false,
                },
            };
            exit_lines.push(line);
        }
        view.push(ViewItem::RoomExits(exit_lines));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemEffect;

    #[test]
    fn exits_are_case_insensitive() {
        let mut room = Room::new("library", "Library", "Books.");
        room.add_exit("Secret", Exit::Room("passage".into()));
        assert_eq!(room.exit("SECRET"), Some(&Exit::Room("passage".into())));
        assert_eq!(room.exit("secret"), Some(&Exit::Room("passage".into())));
        assert!(room.exit("vault").is_none());
    }

    #[test]
    fn lock_and_unlock_one_way() {
        let mut room = Room::new("bedroom", "Master Bedroom", "");
        assert!(!room.is_locked());
        room.lock_with("rusty key");
        assert!(room.is_locked());
        assert_eq!(room.required_key(), Some("rusty key"));
        room.unlock();
        assert!(!room.is_locked());
        assert_eq!(room.required_key(), None);
        room.unlock();
        assert!(!room.is_locked());
    }

    #[test]
    fn empty_key_never_locks() {
        let mut room = Room::new("attic", "Attic", "");
        room.lock_with("   ");
        assert!(!room.is_locked());
    }

    #[test]
    fn dead_enemy_stays_but_is_not_living() {
        let mut room = Room::new("cellar", "Cellar", "");
        room.set_enemy(Enemy::new("rat", "Giant Rat", "", 5, 10));
        room.living_enemy_mut().expect("rat is alive").take_hit(5);
        assert!(room.living_enemy().is_none());
        assert!(room.enemy().is_some());
    }

    #[test]
    fn show_lists_items_in_order_and_hides_dead_enemy_warning() {
        let mut world = BlackwoodWorld::new_empty();
        let mut room = Room::new("kitchen", "Kitchen", "Rotten food.");
        room.add_item(Item::new("knife", "kitchen knife", "Sharp.", ItemEffect::Weapon { damage: 20 }));
        room.add_item(Item::new("bread", "moldy bread", "Ew.", ItemEffect::Passive));
        room.add_exit("out", Exit::Escape);
        let mut rat = Enemy::new("rat", "Giant Rat", "A rat!", 1, 1);
        rat.take_hit(1);
        room.set_enemy(rat);
        world.rooms.insert(room.symbol.clone(), room);

        let mut view = View::new();
        world.rooms["kitchen"].show(&world, &mut view).expect("room shows");
        let kinds: Vec<_> = view.items.iter().map(|e| &e.view_item).collect();
        assert!(!kinds.iter().any(|i| i.is_enemy_warning()));
        let names: Vec<_> = kinds
            .iter()
            .find_map(|i| match i {
                ViewItem::RoomItems(lines) => Some(lines.iter().map(|l| l.name.as_str()).collect::<Vec<_>>()),
                _ => None,
            })
            .expect("items listed");
        assert_eq!(names, vec!["kitchen knife", "moldy bread"]);
    }

    #[test]
    fn show_fails_on_dangling_exit() {
        let mut world = BlackwoodWorld::new_empty();
        let mut room = Room::new("foyer", "Foyer", "");
        room.add_exit("north", Exit::Room("nowhere".into()));
        world.rooms.insert(room.symbol.clone(), room);
        let mut view = View::new();
        assert!(world.rooms["foyer"].show(&world, &mut view).is_err());
    }
}
