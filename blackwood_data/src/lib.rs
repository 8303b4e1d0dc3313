//! Shared data model for Blackwood Mansion content.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, fold_name, validate_world};
