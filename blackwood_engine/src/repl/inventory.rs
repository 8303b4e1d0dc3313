//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that affect player inventory

use crate::entity_search::{SearchError, SearchScope, find_item_index};
use crate::{BlackwoodWorld, ItemHolder, View, ViewItem, WorldObject};

use anyhow::Result;
use log::info;

/// Removes an item from current room and adds it to inventory.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn take_handler(world: &mut BlackwoodWorld, view: &mut View, thing: &str) -> Result<()> {
    if thing.trim().is_empty() {
        view.push(ViewItem::ActionFailure("Take what?".to_string()));
        return Ok(());
    }
    if let Some(enemy) = world.player_room_ref()?.living_enemy() {
        view.push(ViewItem::ActionFailure(format!(
            "You can't focus on looting while the {} threatens you!",
            enemy.name()
        )));
        return Ok(());
    }

    let index = match find_item_index(world, thing, SearchScope::Room) {
        Ok(index) => index,
        Err(SearchError::EmptyQuery | SearchError::NoMatchingName(_)) => {
            view.push(ViewItem::ActionFailure(format!("There's no '{}' here.", thing.trim())));
            return Ok(());
        },
        Err(err @ SearchError::InvalidRoom(_)) => return Err(err.into()),
    };

    let room = world.player_room_mut()?;
    let item = room.items_mut().remove(index);
    info!("player took {} ({}) from {}", item.name(), item.symbol(), room.symbol());
    view.push(ViewItem::ActionSuccess(format!("You picked up: {}", item.name())));
    world.player.add_item(item);
    Ok(())
}
