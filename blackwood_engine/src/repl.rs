//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the various command handlers that manipulate the [`BlackwoodWorld`].

pub mod combat;
mod input;
pub mod inventory;
pub mod item;
pub mod look;
pub mod movement;
pub mod system;

pub use combat::*;
pub use inventory::*;
pub use item::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::ending::{Ending, show_ending};
use crate::style::GameStyle;
use crate::world::BlackwoodWorld;
use crate::{View, ViewItem};

use anyhow::Result;
use log::{info, warn};

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read–eval–print loop until the game ends or the player quits.
///
/// Shows the starting room, then resolves one command per turn while the player
/// is alive and still inside. Returns the ending earned, or `None` if the player quit.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing room for the player.
pub fn run_repl(world: &mut BlackwoodWorld) -> Result<Option<Ending>> {
    let mut view = View::new();
    let mut input_manager = InputManager::new();

    world.player_room_ref()?.show(world, &mut view)?;
    world.player_room_mut()?.visited = true;
    view.flush();

    while world.in_play() {
        let prompt = format!(
            "\n[HP {}/{}]> ",
            world.player.health(),
            world.player.max_health()
        )
        .prompt_style()
        .to_string();

        let input = match input_manager.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => "quit".to_string(),
            Ok(InputEvent::Interrupted) => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
            Err(err) => {
                warn!("failed to read input: {err}");
                view.push(ViewItem::Error("Failed to read input. Try again.".to_string()));
                view.flush();
                continue;
            },
        };

        let command = parse_command(&input);
        let control = dispatch_command(world, &mut view, &command)?;
        view.flush();
        if control == ReplControl::Quit {
            return Ok(None);
        }
    }

    let ending = show_ending(world, &mut view);
    view.flush();
    Ok(Some(ending))
}

/// Resolve one parsed command against the world, including any ambush or retaliation.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing room for the player.
pub fn dispatch_command(world: &mut BlackwoodWorld, view: &mut View, command: &Command) -> Result<ReplControl> {
    info!("command: {command:?}");
    match command {
        Command::Empty => {},
        Command::Help => help_handler(world, view),
        Command::Look => look_handler(world, view)?,
        Command::MoveTo(direction) => move_to_handler(world, view, direction)?,
        Command::Take(thing) => take_handler(world, view, thing)?,
        Command::UseItem(thing) => use_handler(world, view, thing)?,
        Command::Inventory => inv_handler(world, view),
        Command::Attack => attack_handler(world, view)?,
        Command::Examine(thing) => examine_handler(world, view, thing)?,
        Command::Quit => return Ok(quit_handler(world, view)),
        Command::Unknown(input) => unknown_handler(view, input),
    }
    if !world.player.is_alive() {
        info!("player died in {}", world.player.location);
        world.session.stop();
    }
    Ok(ReplControl::Continue)
}
