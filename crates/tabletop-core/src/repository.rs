//! Snapshot repository abstraction.
//!
//! The world is persisted as one complete document. Repositories move that
//! document around as a `serde_json::Value`; mapping it to and from domain
//! types is the caller's job.

use crate::error::DomainError;

/// Repository trait for loading and saving a whole-world snapshot.
pub trait SnapshotRepository {
    /// Load the stored snapshot.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MalformedState` if the stored document cannot be
    /// parsed, or `DomainError::Infrastructure` if it cannot be read.
    fn load_snapshot(&self) -> Result<Option<serde_json::Value>, DomainError>;

    /// Replace the stored snapshot with `snapshot`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the write fails.
    fn save_snapshot(&self, snapshot: &serde_json::Value) -> Result<(), DomainError>;
}
