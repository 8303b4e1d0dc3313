//! `repl::item` module
//!
//! Handler for using carried items.

use crate::entity_search::{SearchError, SearchScope, find_item_index};
use crate::item::ItemEffect;
use crate::{BlackwoodWorld, ItemHolder, View, ViewItem, WorldObject};

use anyhow::Result;
use log::info;

/// Use an item from inventory. Healing items are consumed; anything else stays put.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn use_handler(world: &mut BlackwoodWorld, view: &mut View, thing: &str) -> Result<()> {
    if thing.trim().is_empty() {
        view.push(ViewItem::ActionFailure("Use what?".to_string()));
        return Ok(());
    }
    let index = match find_item_index(world, thing, SearchScope::Inventory) {
        Ok(index) => index,
        Err(SearchError::EmptyQuery | SearchError::NoMatchingName(_)) => {
            view.push(ViewItem::ActionFailure(format!("You don't have '{}'.", thing.trim())));
            return Ok(());
        },
        Err(err @ SearchError::InvalidRoom(_)) => return Err(err.into()),
    };

    let ItemEffect::Heal { amount, message } = world.player.items()[index].effect().clone() else {
        view.push(ViewItem::ActionFailure("You can't use that item directly.".to_string()));
        return Ok(());
    };

    let item = world.player.items_mut().remove(index);
    world.player.heal(amount);
    info!(
        "player used {} ({}) to heal {amount} (health now {})",
        item.name(),
        item.symbol(),
        world.player.health()
    );
    if let Some(message) = message {
        view.push(ViewItem::ActionSuccess(message));
    }
    view.push(ViewItem::CharacterHealed {
        name: "you".to_string(),
        cause: item.name().to_string(),
        amount,
        health: world.player.health(),
        max_health: world.player.max_health(),
    });
    Ok(())
}
