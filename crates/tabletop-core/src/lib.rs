//! Tabletop Core — shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that all bounded
//! contexts depend on: the error type, the name-keyed entity store, the
//! randomness seam, and the snapshot repository contract. It contains no
//! infrastructure code.

pub mod command;
pub mod error;
pub mod named;
pub mod repository;
pub mod rng;
