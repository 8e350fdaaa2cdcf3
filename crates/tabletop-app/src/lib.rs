//! Tabletop campaign manager — composition root.
//!
//! Wires configuration, tracing, the JSON-file store, name tables and the
//! random source into a [`campaign::Campaign`] that is opened at the start of
//! a play session and closed (saved) at the end.

pub mod campaign;
pub mod config;
pub mod error;
pub mod persistence;
pub mod telemetry;

pub use persistence::{load_world_file, save_world_file};
