//! Tabletop campaign manager — turn-order sessions.
//!
//! A turn session merges the party with the occupants of one place and
//! orders them by how many ticks remain until each acts. Sessions are built
//! from live character data and never persisted.

pub mod application;
pub mod domain;
