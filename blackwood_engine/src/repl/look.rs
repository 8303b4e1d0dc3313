//! `repl::look` module
//!
//! Handlers for looking around, examining things and checking inventory.

use crate::entity_search::{Examinable, SearchError, find_examinable};
use crate::{BlackwoodWorld, View, ViewItem};

use anyhow::Result;
use log::info;

/// Show the current room again.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn look_handler(world: &BlackwoodWorld, view: &mut View) -> Result<()> {
    let room = world.player_room_ref()?;
    room.show(world, view)?;
    info!("player looked around {}", room.symbol);
    Ok(())
}

/// Describe an item in the room or inventory, or the room's enemy.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn examine_handler(world: &BlackwoodWorld, view: &mut View, thing: &str) -> Result<()> {
    if thing.trim().is_empty() {
        view.push(ViewItem::ActionFailure("Examine what?".to_string()));
        return Ok(());
    }
    match find_examinable(world, thing) {
        Ok(Examinable::Item(item)) => item.show(view),
        Ok(Examinable::Enemy(enemy)) => enemy.show(view),
        Err(SearchError::EmptyQuery | SearchError::NoMatchingName(_)) => {
            view.push(ViewItem::ActionFailure(
                "You don't see anything special about that.".to_string(),
            ));
        },
        Err(err @ SearchError::InvalidRoom(_)) => return Err(err.into()),
    }
    Ok(())
}

/// Show health and carried items.
pub fn inv_handler(world: &BlackwoodWorld, view: &mut View) {
    world.player.show_status(view);
}
