//! Entity Search Module
//!
//! Several handlers need to turn a fragment of player input ("key", "potion")
//! into a specific item or enemy near the player. Matching is a case-insensitive
//! substring test and the first match in list order wins.
//!
//! Callers send the world, the search string and a scope, and get back either
//! the position of the match or the reason nothing was found (`SearchError`).

use thiserror::Error;

use crate::world::{BlackwoodWorld, WorldError};
use crate::{Enemy, Item, ItemHolder, WorldObject};

/// Where to look for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchScope {
    /// Items lying in the player's current room.
    Room,
    /// Items the player carries.
    Inventory,
}

/// Possible errors / situations causing a failed entity search.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no search text supplied")]
    EmptyQuery,
    #[error("nothing in scope has a name matching '{0}'")]
    NoMatchingName(String),
    #[error(transparent)]
    InvalidRoom(#[from] WorldError),
}

/// Something the player can examine.
#[derive(Debug, Clone, Copy)]
pub enum Examinable<'a> {
    Item(&'a Item),
    Enemy(&'a Enemy),
}

/// Find the first item matching `pattern` in `scope` and return its index in that list.
///
/// # Errors
/// - `EmptyQuery` for blank input
/// - `NoMatchingName` if no item name contains the pattern
/// - `InvalidRoom` if the player stands in a room that doesn't exist
pub fn find_item_index(world: &BlackwoodWorld, pattern: &str, scope: SearchScope) -> Result<usize, SearchError> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    let found = match scope {
        SearchScope::Room => world.player_room_ref()?.find_item(pattern),
        SearchScope::Inventory => world.player.find_item(pattern),
    };
    found.ok_or_else(|| SearchError::NoMatchingName(pattern.to_string()))
}

/// Find something to examine: room items first, then inventory, then the room's enemy.
///
/// # Errors
/// Same conditions as [`find_item_index`].
pub fn find_examinable<'a>(world: &'a BlackwoodWorld, pattern: &str) -> Result<Examinable<'a>, SearchError> {
    let pattern = pattern.trim();
    if pattern.is_empty() {
        return Err(SearchError::EmptyQuery);
    }
    let room = world.player_room_ref()?;
    if let Some(index) = room.find_item(pattern) {
        return Ok(Examinable::Item(&room.items()[index]));
    }
    if let Some(index) = world.player.find_item(pattern) {
        return Ok(Examinable::Item(&world.player.items()[index]));
    }
    room.enemy()
        .filter(|enemy| enemy.name().to_lowercase().contains(&pattern.to_lowercase()))
        .map(Examinable::Enemy)
        .ok_or_else(|| SearchError::NoMatchingName(pattern.to_string()))
}
