//! Tabletop campaign manager — character sheets and generation.
//!
//! Responsible for the five core stats, derived vitals, skills, carried
//! items, and procedural generation of characters from archetypes and
//! name-frequency corpora.

pub mod application;
pub mod domain;
