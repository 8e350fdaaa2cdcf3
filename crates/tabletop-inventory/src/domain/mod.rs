//! Domain model for items.

pub mod item;
