//! Health Module
//!
//! Handles hit points for the player and for enemies.
use std::cmp;

/// Hit point tracking for a living entity.
///
/// Healing saturates at `max_hp`. Damage does not stop at zero: a finishing blow
/// or a heavy retaliation may leave `current_hp` negative, and anything at or
/// below zero counts as dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthState {
    max_hp: i32,
    current_hp: i32,
}
impl HealthState {
    /// Create a clean `HealthState` with specified maximum health
    pub fn new_at_max(max_hp: i32) -> HealthState {
        HealthState {
            max_hp,
            current_hp: max_hp,
        }
    }

    /// Get the maximum HP for this entity
    pub fn max_hp(&self) -> i32 {
        self.max_hp
    }

    /// Get the current HP for this entity
    pub fn current_hp(&self) -> i32 {
        self.current_hp
    }

    /// Return whether this entity is alive or dead.
    pub fn life_state(&self) -> LifeState {
        if self.current_hp > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// Do damage to health. Not clamped at zero.
    pub fn damage(&mut self, amount: i32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Heal the character. Saturates at max health.
    pub fn heal(&mut self, amount: i32) {
        self.current_hp = cmp::min(self.max_hp, self.current_hp.saturating_add(amount));
    }
}

/// Possible life states for living entities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifeState {
    Alive,
    Dead,
}
