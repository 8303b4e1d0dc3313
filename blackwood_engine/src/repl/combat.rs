//! `repl::combat` module
//!
//! One round of combat: the player strikes, then a surviving enemy strikes back.

use crate::{BlackwoodWorld, View, ViewItem, WorldObject};

use anyhow::Result;
use log::info;

/// Attack the enemy in the current room.
///
/// The first weapon in inventory order sets the damage; without one the player
/// fights bare-handed for `Rules::fist_damage`. A surviving enemy retaliates for
/// its full damage. A killed enemy stays in the room and never strikes again.
///
/// # Errors
/// - if the player's current room is missing from the world
pub fn attack_handler(world: &mut BlackwoodWorld, view: &mut View) -> Result<()> {
    let (weapon, damage) = match world.player.weapon() {
        Some(item) => (Some(item.name().to_string()), item.damage()),
        None => (None, world.rules.fist_damage),
    };

    let (player, room) = world.player_and_room_mut()?;
    let Some(enemy) = room.living_enemy_mut() else {
        view.push(ViewItem::ActionFailure("There's nothing to attack here.".to_string()));
        return Ok(());
    };

    enemy.take_hit(damage);
    info!(
        "player hit {} with {} for {damage} (enemy health now {})",
        enemy.name(),
        weapon.as_deref().unwrap_or("fists"),
        enemy.health()
    );
    view.push(ViewItem::CombatStrike {
        weapon,
        target: enemy.name().to_string(),
        damage,
        remaining: enemy.health(),
    });

    if enemy.is_alive() {
        let retaliation = enemy.damage();
        player.take_damage(retaliation);
        info!(
            "{} struck back for {retaliation} (player health now {})",
            enemy.name(),
            player.health()
        );
        view.push(ViewItem::CharacterHarmed {
            name: "you".to_string(),
            cause: enemy.name().to_string(),
            amount: retaliation,
            health: player.health(),
            max_health: player.max_health(),
        });
    } else {
        info!("{} defeated", enemy.name());
        view.push(ViewItem::EnemyDefeated(enemy.name().to_string()));
        world.session.record_kill();
    }
    Ok(())
}
