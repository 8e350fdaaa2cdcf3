//! Application services for turn sessions.

pub mod command_handlers;
pub mod query_handlers;
