//! Player -- the one trapped in Blackwood Mansion.
use crate::{
    ItemHolder, View, ViewItem, WorldObject,
    health::{HealthState, LifeState},
    item::Item,
    view::ContentLine,
    world::Id,
};

use blackwood_data::fold_name;

/// Starting (and maximum) health when the world data doesn't say otherwise.
pub const DEFAULT_MAX_HEALTH: i32 = 100;

#[derive(Debug, Clone)]
pub struct Player {
    /// Id of the room the player stands in. Always a room that exists in the world.
    pub location: Id,
    health: HealthState,
    inventory: Vec<Item>,
}
impl Default for Player {
    fn default() -> Player {
        Self {
            location: Id::new(),
            health: HealthState::new_at_max(DEFAULT_MAX_HEALTH),
            inventory: Vec::new(),
        }
    }
}
impl ItemHolder for Player {
    fn items(&self) -> &[Item] {
        &self.inventory
    }
    fn items_mut(&mut self) -> &mut Vec<Item> {
        &mut self.inventory
    }
}
impl Player {
    pub fn new(location: impl Into<Id>, max_health: i32) -> Player {
        Self {
            location: location.into(),
            health: HealthState::new_at_max(max_health),
            inventory: Vec::new(),
        }
    }

    pub fn health(&self) -> i32 {
        self.health.current_hp()
    }

    pub fn max_health(&self) -> i32 {
        self.health.max_hp()
    }

    pub fn is_alive(&self) -> bool {
        self.health.life_state() == LifeState::Alive
    }

    /// Restore health, never beyond the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.health.heal(amount);
    }

    /// Lose health. May leave the player below zero.
    pub fn take_damage(&mut self, amount: i32) {
        self.health.damage(amount);
    }

    /// Returns true if the inventory holds an item with exactly this name (ignoring case).
    pub fn has_item(&self, item_name: &str) -> bool {
        let wanted = fold_name(item_name);
        self.inventory.iter().any(|i| fold_name(i.name()) == wanted)
    }

    /// First weapon in acquisition order, if any.
    pub fn weapon(&self) -> Option<&Item> {
        self.inventory.iter().find(|i| i.is_weapon())
    }

    /// Show health and inventory.
    pub fn show_status(&self, view: &mut View) {
        view.push(ViewItem::Inventory {
            health: self.health(),
            max_health: self.max_health(),
            items: self
                .inventory
                .iter()
                .map(|item| ContentLine {
                    item_name: item.name().to_string(),
                    weapon_damage: item.is_weapon().then(|| item.damage()),
                })
                .collect(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemEffect;

    #[test]
    fn new_player_is_at_full_health() {
        let player = Player::default();
        assert_eq!(player.health(), 100);
        assert_eq!(player.max_health(), 100);
        assert!(player.is_alive());
        assert!(player.items().is_empty());
    }

    #[test]
    fn has_item_requires_full_name() {
        let mut player = Player::default();
        player.add_item(Item::new("key", "Rusty Key", "", ItemEffect::Passive));
        assert!(player.has_item("rusty key"));
        assert!(!player.has_item("rusty"));

        player.add_item(Item::new("old_key", "Schlüssel", "", ItemEffect::Passive));
        assert!(player.has_item("SCHLÜSSEL"));
    }

    #[test]
    fn first_weapon_wins() {
        let mut player = Player::default();
        player.add_item(Item::new("lamp", "flashlight", "", ItemEffect::Passive));
        player.add_item(Item::new("knife", "kitchen knife", "", ItemEffect::Weapon { damage: 20 }));
        player.add_item(Item::new("dagger", "silver dagger", "", ItemEffect::Weapon { damage: 35 }));
        assert_eq!(player.weapon().map(Item::damage), Some(20));
    }

    #[test]
    fn heal_is_capped_and_damage_is_not() {
        let mut player = Player::new("foyer", 100);
        player.take_damage(10);
        player.heal(15);
        assert_eq!(player.health(), 100);
        player.take_damage(120);
        assert_eq!(player.health(), -20);
        assert!(!player.is_alive());
    }
}
