//! Item types and related helpers.
//!
//! Items are inert objects the player can pick up, wield, or consume. Every item
//! is owned by exactly one holder at a time (a room or the player's inventory),
//! and moving it between holders is a move of the value itself.

use crate::{View, ViewItem, WorldObject, world::Id};

use blackwood_data::ItemEffectDef;
/// What an item does, decided when the world is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemEffect {
    /// Nothing happens when used. Keys and curios.
    Passive,
    /// Wielded automatically in combat.
    Weapon { damage: i32 },
    /// Restores health and is consumed on use.
    Heal { amount: i32, message: Option<String> },
}
impl From<&ItemEffectDef> for ItemEffect {
    fn from(def: &ItemEffectDef) -> Self {
        match def {
            ItemEffectDef::Passive => ItemEffect::Passive,
            ItemEffectDef::Weapon { damage } => ItemEffect::Weapon {
                damage: i32::try_from(*damage).unwrap_or(i32::MAX),
            },
            ItemEffectDef::Heal { amount, message } => ItemEffect::Heal {
                amount: i32::try_from(*amount).unwrap_or(i32::MAX),
                message: message.clone(),
            },
        }
    }
}

/// Anything in the mansion that can be picked up and carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    symbol: Id,
    name: String,
    description: String,
    effect: ItemEffect,
}

impl WorldObject for Item {
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

impl Item {
    pub fn new(symbol: impl Into<Id>, name: impl Into<String>, description: impl Into<String>, effect: ItemEffect) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            description: description.into(),
            effect,
        }
    }

    pub fn effect(&self) -> &ItemEffect {
        &self.effect
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self.effect, ItemEffect::Weapon { .. })
    }

    /// Damage dealt when wielded; zero for anything that isn't a weapon.
    pub fn damage(&self) -> i32 {
        match self.effect {
            ItemEffect::Weapon { damage } => damage,
            _ => 0,
        }
    }

    /// Case-insensitive substring match against the item's name.
    pub fn name_contains(&self, pattern: &str) -> bool {
        self.name.to_lowercase().contains(&pattern.to_lowercase())
    }

    /// Show item description (and weapon damage, if any).
    pub fn show(&self, view: &mut View) {
        view.push(ViewItem::ItemDescription {
            name: self.name.clone(),
            description: self.description.clone(),
            damage: self.is_weapon().then(|| self.damage()),
        });
    }
}

/// Anything that owns an ordered list of items (rooms and the player).
pub trait ItemHolder {
    fn items(&self) -> &[Item];
    fn items_mut(&mut self) -> &mut Vec<Item>;

    /// Append an item, taking ownership of it.
    fn add_item(&mut self, item: Item) {
        self.items_mut().push(item);
    }

    /// Index of the first item (in list order) whose name contains `pattern`.
    fn find_item(&self, pattern: &str) -> Option<usize> {
        self.items().iter().position(|item| item.name_contains(pattern))
    }

    /// Remove the first item whose name contains `pattern` and hand it to the caller.
    fn remove_item(&mut self, pattern: &str) -> Option<Item> {
        let index = self.find_item(pattern)?;
        Some(self.items_mut().remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Sack(Vec<Item>);
    impl ItemHolder for Sack {
        fn items(&self) -> &[Item] {
            &self.0
        }
        fn items_mut(&mut self) -> &mut Vec<Item> {
            &mut self.0
        }
    }

    fn passive(symbol: &str, name: &str) -> Item {
        Item::new(symbol, name, "", ItemEffect::Passive)
    }

    #[test]
    fn weapon_damage_and_flags() {
        let knife = Item::new("knife", "kitchen knife", "", ItemEffect::Weapon { damage: 20 });
        assert!(knife.is_weapon());
        assert_eq!(knife.damage(), 20);
        let key = passive("key", "rusty key");
        assert!(!key.is_weapon());
        assert_eq!(key.damage(), 0);
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let tome = passive("tome", "Ancient Tome");
        assert!(tome.name_contains("tome"));
        assert!(tome.name_contains("ANCIENT t"));
        assert!(!tome.name_contains("scroll"));
    }

    #[test]
    fn first_match_in_list_order_wins() {
        let mut sack = Sack(vec![passive("a", "red key"), passive("b", "blue key")]);
        assert_eq!(sack.find_item("key"), Some(0));
        let taken = sack.remove_item("key").expect("a key is present");
        assert_eq!(taken.symbol(), "a");
        assert_eq!(sack.items().len(), 1);
        assert_eq!(sack.items()[0].symbol(), "b");
    }

    #[test]
    fn effect_converts_from_definition() {
        let def = ItemEffectDef::Heal {
            amount: 15,
            message: Some("Yuck.".into()),
        };
        assert_eq!(
            ItemEffect::from(&def),
            ItemEffect::Heal {
                amount: 15,
                message: Some("Yuck.".into())
            }
        );
        assert_eq!(
            ItemEffect::from(&ItemEffectDef::Weapon { damage: 35 }),
            ItemEffect::Weapon { damage: 35 }
        );
    }
}
