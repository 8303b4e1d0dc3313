//! Enemies lurking in the mansion.
//!
//! Each enemy is bound to one room when the world is built and stays there for the
//! rest of the game, alive or not. A dead enemy is inert: it blocks nothing.

use crate::{
    View, ViewItem, WorldObject,
    health::{HealthState, LifeState},
    world::Id,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enemy {
    symbol: Id,
    name: String,
    description: String,
    damage: i32,
    health: HealthState,
}

impl WorldObject for Enemy {
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

impl Enemy {
    pub fn new(
        symbol: impl Into<Id>,
        name: impl Into<String>,
        description: impl Into<String>,
        health: i32,
        damage: i32,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            description: description.into(),
            damage,
            health: HealthState::new_at_max(health),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health.life_state() == LifeState::Alive
    }

    pub fn health(&self) -> i32 {
        self.health.current_hp()
    }

    /// Full damage dealt when striking back in combat.
    pub fn damage(&self) -> i32 {
        self.damage
    }

    /// Damage dealt by the surprise attack when the player walks in.
    pub fn ambush_damage(&self, divisor: i32) -> i32 {
        if divisor <= 0 { self.damage } else { self.damage / divisor }
    }

    /// Apply a blow from the player. Health may drop below zero.
    pub fn take_hit(&mut self, amount: i32) {
        self.health.damage(amount);
    }

    pub fn show(&self, view: &mut View) {
        view.push(ViewItem::EnemyDescription {
            name: self.name.clone(),
            description: self.description.clone(),
            health: self.health(),
            alive: self.is_alive(),
        });
    }
}
