//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities.

use crate::{BlackwoodWorld, View, ViewItem, repl::ReplControl};

use log::info;

/// Show the help text loaded at startup.
pub fn help_handler(world: &BlackwoodWorld, view: &mut View) {
    view.push(ViewItem::Help {
        basic_text: world.help.basic_text.clone(),
        commands: world.help.commands.clone(),
    });
}

/// Quit the game. No ending is awarded.
pub fn quit_handler(world: &mut BlackwoodWorld, view: &mut View) -> ReplControl {
    info!(
        "player quit in {} with {} hp and {} monsters defeated",
        world.player.location,
        world.player.health(),
        world.session.monsters_defeated
    );
    world.session.stop();
    view.push(ViewItem::EngineMessage("Thanks for playing!".to_string()));
    ReplControl::Quit
}

/// Respond to input that isn't a known command.
pub fn unknown_handler(view: &mut View, input: &str) {
    info!("unrecognized input: '{input}'");
    view.push(ViewItem::Error(format!(
        "I don't understand '{input}'. Type 'help' for commands."
    )));
}
