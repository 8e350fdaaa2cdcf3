//! Tabletop campaign manager — party, places and the persisted world.
//!
//! Owns the world aggregate (the travelling party, the named places and the
//! item catalog), the explicit mutations the presentation layer calls, and
//! whole-world load/save with post-load item linking.

pub mod application;
pub mod domain;
