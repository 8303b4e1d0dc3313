#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Engine for escaping Blackwood Mansion: a small graph of rooms, the items and
//! enemies inside them, and the command loop that moves a player through it.

pub const BLACKWOOD_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod ending;
pub mod enemy;
pub mod entity_search;
pub mod health;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod session;
pub mod style;
pub mod view;
pub mod world;

// Re-exports for convenience
pub use ending::Ending;
pub use enemy::Enemy;
pub use item::{Item, ItemHolder};
pub use loader::load_world;
pub use player::Player;
pub use repl::run_repl;
pub use room::Room;
pub use view::{View, ViewItem};
pub use world::{BlackwoodWorld, WorldObject};
