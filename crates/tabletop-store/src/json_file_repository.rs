//! File-backed implementation of the `SnapshotRepository` trait.
//!
//! Each call opens the file, does its work, and drops the handle before
//! returning, whether it succeeded or not.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tabletop_core::error::DomainError;
use tabletop_core::repository::SnapshotRepository;
use tracing::debug;

/// Stores the world snapshot as a pretty-printed JSON document.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository backed by the file at `path`. The file need not
    /// exist yet.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn infrastructure(&self, action: &str, err: impl std::fmt::Display) -> DomainError {
        DomainError::Infrastructure(format!(
            "failed to {action} {}: {err}",
            self.path.display()
        ))
    }
}

impl SnapshotRepository for JsonFileRepository {
    fn load_snapshot(&self) -> Result<Option<serde_json::Value>, DomainError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "snapshot file absent");
                return Ok(None);
            }
            Err(e) => return Err(self.infrastructure("open", e)),
        };

        let snapshot = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            if e.is_io() {
                self.infrastructure("read", e)
            } else {
                DomainError::MalformedState(format!("{}: {e}", self.path.display()))
            }
        })?;
        debug!(path = %self.path.display(), "snapshot file read");
        Ok(Some(snapshot))
    }

    fn save_snapshot(&self, snapshot: &serde_json::Value) -> Result<(), DomainError> {
        let file = File::create(&self.path).map_err(|e| self.infrastructure("create", e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, snapshot)
            .map_err(|e| self.infrastructure("write", e))?;
        writer.flush().map_err(|e| self.infrastructure("flush", e))?;
        debug!(path = %self.path.display(), "snapshot file written");
        Ok(())
    }
}
