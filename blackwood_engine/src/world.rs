//! Data structures representing the game world.
//!
//! This module defines [`BlackwoodWorld`], which owns every room (and through
//! them every item and enemy), the player, and the session flags for one game.

use crate::BLACKWOOD_VERSION;
use crate::loader::help::HelpData;
use crate::loader::rules::Rules;
use crate::session::SessionState;
use crate::{Player, Room};

use log::info;
use std::collections::HashMap;
use thiserror::Error;

/// Stable identifier for rooms, items and enemies (the symbol from the world data).
pub type Id = String;

/// Methods common to any object in the world.
pub trait WorldObject {
    fn symbol(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
}

/// Faults in the world graph itself, as opposed to invalid player actions.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("no room with id '{0}' exists in the world")]
    UnknownRoom(Id),
}

/// Complete state of the running game.
#[derive(Debug, Clone, Default)]
pub struct BlackwoodWorld {
    pub title: String,
    /// One-line premise shown under the title.
    pub blurb: String,
    pub rooms: HashMap<Id, Room>,
    pub player: Player,
    pub session: SessionState,
    pub rules: Rules,
    pub help: HelpData,
    pub version: String,
}
impl BlackwoodWorld {
    /// Create a new empty world with a default player.
    pub fn new_empty() -> BlackwoodWorld {
        let world = Self {
            version: BLACKWOOD_VERSION.to_string(),
            ..Self::default()
        };
        info!("new, empty 'BlackwoodWorld' created");
        world
    }

    /// Obtain a reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_room_ref(&self) -> Result<&Room, WorldError> {
        self.rooms
            .get(&self.player.location)
            .ok_or_else(|| WorldError::UnknownRoom(self.player.location.clone()))
    }

    /// Obtain a mutable reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_room_mut(&mut self) -> Result<&mut Room, WorldError> {
        self.rooms
            .get_mut(&self.player.location)
            .ok_or_else(|| WorldError::UnknownRoom(self.player.location.clone()))
    }

    /// Borrow the player and the room they stand in at the same time.
    /// # Errors
    /// - if the player's room id is not found
    pub fn player_and_room_mut(&mut self) -> Result<(&mut Player, &mut Room), WorldError> {
        let room = self
            .rooms
            .get_mut(&self.player.location)
            .ok_or_else(|| WorldError::UnknownRoom(self.player.location.clone()))?;
        Ok((&mut self.player, room))
    }

    /// True while the main loop should keep accepting commands.
    pub fn in_play(&self) -> bool {
        self.session.running && self.player.is_alive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_empty_sets_version() {
        let world = BlackwoodWorld::new_empty();
        assert_eq!(world.version, BLACKWOOD_VERSION);
        assert!(world.rooms.is_empty());
    }

    #[test]
    fn player_room_lookup_fails_for_unknown_room() {
        let mut world = BlackwoodWorld::new_empty();
        world.player.location = "void".into();
        let err = world.player_room_ref().expect_err("no such room");
        assert_eq!(err.to_string(), "no room with id 'void' exists in the world");
    }

    #[test]
    fn player_room_lookup_finds_room() {
        let mut world = BlackwoodWorld::new_empty();
        world.rooms.insert("foyer".into(), Room::new("foyer", "Foyer", ""));
        world.player.location = "foyer".into();
        assert_eq!(world.player_room_ref().map(|r| r.name.as_str()).ok(), Some("Foyer"));
        assert!(world.player_room_mut().is_ok());
    }

    #[test]
    fn in_play_tracks_session_and_health() {
        let mut world = BlackwoodWorld::new_empty();
        assert!(world.in_play());
        world.player.take_damage(100);
        assert!(!world.in_play());
    }
}
