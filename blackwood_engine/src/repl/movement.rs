//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use crate::room::Exit;
use crate::world::WorldError;
use crate::{BlackwoodWorld, View, ViewItem, WorldObject};

use anyhow::Result;
use log::info;

const GO_WHERE: &str = "Go where? Try: go north, go south, go east, go west, go up, go down";

/// Move the player through an exit, if nothing stands in the way.
///
/// Order of checks: a living enemy blocks every move; then the exit must exist;
/// the way out ends the game; a locked destination needs its key in inventory.
///
/// # Errors
/// - if the player's room, or the exit's destination, is missing from the world
pub fn move_to_handler(world: &mut BlackwoodWorld, view: &mut View, input_dir: &str) -> Result<()> {
    let direction = input_dir.trim().to_lowercase();
    if direction.is_empty() {
        view.push(ViewItem::ActionFailure(GO_WHERE.to_string()));
        return Ok(());
    }

    let current_room = world.player_room_ref()?;
    if let Some(enemy) = current_room.living_enemy() {
        info!("move '{direction}' blocked by {} ({})", enemy.name(), enemy.symbol());
        view.push(ViewItem::ActionFailure(format!(
            "The {} blocks your escape! You must fight or die!",
            enemy.name()
        )));
        return Ok(());
    }

    let here = current_room.symbol().to_string();
    let destination_id = match current_room.exit(&direction).cloned() {
        None => {
            info!("no exit '{direction}' from {here}");
            view.push(ViewItem::ActionFailure("You can't go that way.".to_string()));
            return Ok(());
        },
        Some(Exit::Escape) => {
            info!("player escaped through '{direction}' from {here}");
            world.session.escape();
            view.push(ViewItem::ActionSuccess(
                "You push through the last door and stumble out into the cold night air. You're free!".to_string(),
            ));
            return Ok(());
        },
        Some(Exit::Room(to)) => to,
    };

    let destination = world
        .rooms
        .get_mut(&destination_id)
        .ok_or_else(|| WorldError::UnknownRoom(destination_id.clone()))?;
    if let Some(key) = destination.required_key() {
        if world.player.has_item(key) {
            view.push(ViewItem::ActionSuccess(format!("You use the {key} to unlock the passage!")));
            info!("{} unlocked with '{key}'", destination.symbol());
            destination.unlock();
        } else {
            info!("{} is locked; player lacks '{key}'", destination.symbol());
            view.push(ViewItem::ActionFailure(
                "This way is locked. You need something to open it...".to_string(),
            ));
            return Ok(());
        }
    }

    world.player.location.clone_from(&destination_id);
    info!("player moved to {destination_id}");
    let new_room = world.player_room_ref()?;
    new_room.show(world, view)?;
    world.player_room_mut()?.visited = true;

    ambush(world, view)
}

/// A living enemy in the room the player just entered strikes first, for a fraction of its damage.
fn ambush(world: &mut BlackwoodWorld, view: &mut View) -> Result<()> {
    let divisor = world.rules.ambush_divisor;
    let (player, room) = world.player_and_room_mut()?;
    if let Some(enemy) = room.living_enemy() {
        let amount = enemy.ambush_damage(divisor);
        player.take_damage(amount);
        info!(
            "{} ambushed the player for {amount} (health now {})",
            enemy.name(),
            player.health()
        );
        view.push(ViewItem::CharacterHarmed {
            name: "you".to_string(),
            cause: enemy.name().to_string(),
            amount,
            health: player.health(),
            max_health: player.max_health(),
        });
    }
    Ok(())
}
