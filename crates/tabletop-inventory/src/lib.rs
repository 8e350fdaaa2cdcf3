//! Tabletop campaign manager — item catalog and carried items.
//!
//! Responsible for item definitions and their properties, the instances
//! characters carry, and resolving instances against the catalog.

pub mod domain;
