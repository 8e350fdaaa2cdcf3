//! Shared test doubles and utilities for the tabletop campaign manager.

mod repository;
mod rng;
mod subscriber;

pub use repository::{FailingSnapshotRepository, InMemorySnapshotRepository};
pub use rng::{MockRng, SequenceRng};
pub use subscriber::init_test_tracing;
