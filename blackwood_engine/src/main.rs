#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Blackwood Mansion **
//! Survive the night, find the way out.

use blackwood_engine::data_paths::data_path;
use blackwood_engine::style::GameStyle;
use blackwood_engine::{load_world, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;
use log::{info, warn};

use std::fs;
use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading Blackwood Mansion...");
    let mut world = load_world().context("while loading BlackwoodWorld")?;
    info!("BlackwoodWorld v{} loaded successfully.", world.version);

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush()?;
    info!("Starting the game!");

    println!("{:^60}", world.title.to_uppercase().bright_red().bold().underline());
    if !world.blurb.is_empty() {
        println!("{:^60}", world.blurb.italic());
    }
    println!();

    match fs::read_to_string(data_path("intro.txt")) {
        Ok(introduction) => println!("{}\n", introduction.trim_end().description_style()),
        Err(err) => warn!("could not read intro text: {err}"),
    }

    match run_repl(&mut world)? {
        Some(ending) => info!("game finished with {ending}"),
        None => info!("game ended by quit"),
    }
    Ok(())
}
