//! Loader utilities for building a `BlackwoodWorld`.
//!
//! The mansion itself is fixed: its `WorldDef` (RON) is compiled into the binary.
//! Rules and help text are read from the data directory at startup, falling
//! back to defaults when they can't be read.

pub mod help;
pub mod rules;
pub mod worlddef;

use crate::data_paths::data_path;
use crate::loader::help::load_help_or_default;
use crate::loader::rules::load_rules;
use crate::loader::worlddef::{build_world_from_def, parse_worlddef};
use crate::{BlackwoodWorld, ItemHolder, WorldObject};

use anyhow::{Context, Result};
use blackwood_data::WorldDef;
use log::info;

/// World data for Blackwood Mansion.
const BLACKWOOD_RON: &str = include_str!("../data/world.ron");

/// Parse the built-in Blackwood Mansion definition.
///
/// # Errors
/// Only if the embedded data is malformed.
pub fn blackwood_def() -> Result<WorldDef> {
    parse_worlddef(BLACKWOOD_RON).context("while parsing built-in Blackwood Mansion data")
}

/// Build the Blackwood Mansion world with default rules and no help text.
///
/// # Errors
/// Only if the embedded data is malformed or fails validation.
pub fn build_blackwood() -> Result<BlackwoodWorld> {
    build_world_from_def(&blackwood_def()?).context("while building Blackwood Mansion")
}

/// Build the world and load rules and help from the data directory.
///
/// # Errors
/// Errors bubble up from the embedded world data. Missing or broken rules and
/// help files only produce a warning.
pub fn load_world() -> Result<BlackwoodWorld> {
    let mut world = build_blackwood()?;
    info!("{} rooms added to BlackwoodWorld", world.rooms.len());
    info!(
        "{} items and {} enemies placed",
        world
            .rooms
            .values()
            .map(|r| r.items().len())
            .sum::<usize>(),
        world.rooms.values().filter(|r| r.enemy().is_some()).count()
    );

    world.rules = load_rules(&data_path("rules.toml"));
    world.help = load_help_or_default(&data_path("help_basic.txt"), &data_path("help_commands.toml"));

    info!(
        "player starts in {} with {} hp",
        world.player_room_ref()?.name(),
        world.player.health()
    );
    Ok(world)
}
