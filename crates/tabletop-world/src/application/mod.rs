//! Application services for the world.

pub mod command_handlers;
pub mod persistence;
pub mod query_handlers;
