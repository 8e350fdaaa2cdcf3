//! In-memory and failing `SnapshotRepository` doubles.

use std::sync::Mutex;

use tabletop_core::error::DomainError;
use tabletop_core::repository::SnapshotRepository;

/// A snapshot repository held in memory. Records every saved snapshot and
/// serves the most recent one from `load_snapshot`.
#[derive(Debug, Default)]
pub struct InMemorySnapshotRepository {
    saved: Mutex<Vec<serde_json::Value>>,
}

impl InMemorySnapshotRepository {
    /// Create an empty repository; `load_snapshot` returns `None` until
    /// something is saved.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: serde_json::Value) -> Self {
        Self {
            saved: Mutex::new(vec![snapshot]),
        }
    }

    /// Returns every snapshot saved so far, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved_snapshots(&self) -> Vec<serde_json::Value> {
        self.saved.lock().unwrap().clone()
    }
}

impl SnapshotRepository for InMemorySnapshotRepository {
    fn load_snapshot(&self) -> Result<Option<serde_json::Value>, DomainError> {
        Ok(self.saved.lock().unwrap().last().cloned())
    }

    fn save_snapshot(&self, snapshot: &serde_json::Value) -> Result<(), DomainError> {
        self.saved.lock().unwrap().push(snapshot.clone());
        Ok(())
    }
}

/// A snapshot repository that fails every call with an infrastructure error.
#[derive(Debug)]
pub struct FailingSnapshotRepository;

impl SnapshotRepository for FailingSnapshotRepository {
    fn load_snapshot(&self) -> Result<Option<serde_json::Value>, DomainError> {
        Err(DomainError::Infrastructure("disk unavailable".into()))
    }

    fn save_snapshot(&self, _snapshot: &serde_json::Value) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("disk unavailable".into()))
    }
}
