//! Domain model for turn sessions.

pub mod commands;
pub mod scheduler;
pub mod turn;
