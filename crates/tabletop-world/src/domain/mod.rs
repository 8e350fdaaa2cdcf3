//! Domain model for the world.

pub mod commands;
pub mod place;
pub mod world;
