//! Domain model for characters.

pub mod archetypes;
pub mod character;
pub mod commands;
pub mod names;
pub mod stats;
