//! Combat and ending rules.
//!
//! The numbers that shape a fight and decide which ending the player earns live
//! in `rules.toml`. Every field is optional; anything missing falls back to the
//! stock value, and an unreadable file falls back entirely.

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunable numbers used by combat, movement and the ending classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Damage dealt when the player has no weapon.
    pub fist_damage: i32,
    /// Entering a room with a living enemy costs `enemy damage / ambush_divisor`.
    pub ambush_divisor: i32,
    /// Kills needed (on escape) for the perfect ending.
    pub perfect_kills: u32,
    /// Kills needed (on escape) for the good ending.
    pub good_kills: u32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            fist_damage: 5,
            ambush_divisor: 2,
            perfect_kills: 3,
            good_kills: 1,
        }
    }
}

/// Loads rules from a TOML file, falling back to defaults on error.
///
/// Never fails. A missing or malformed file is logged with `warn!`.
pub fn load_rules(toml_path: &Path) -> Rules {
    match try_load_rules(toml_path) {
        Ok(rules) => {
            info!("rules loaded from '{}': {rules:?}", toml_path.display());
            rules
        },
        Err(e) => {
            warn!(
                "Could not load rules from '{}': {e:#}. Using hardcoded defaults.",
                toml_path.display()
            );
            Rules::default()
        },
    }
}

fn try_load_rules(toml_path: &Path) -> Result<Rules> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading rules from '{}'", toml_path.display()))?;
    let rules: Rules =
        toml::from_str(&text).with_context(|| format!("parsing rules from '{}'", toml_path.display()))?;
    if rules.good_kills > rules.perfect_kills {
        warn!(
            "good_kills ({}) exceeds perfect_kills ({}); the good ending can never be reached",
            rules.good_kills, rules.perfect_kills
        );
    }
    Ok(rules)
}
