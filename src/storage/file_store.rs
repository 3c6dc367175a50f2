//! File-backed snapshot store.

use crate::error::StorageResult;
use crate::models::AddressBook;
use crate::storage::{LoadOutcome, SnapshotStore};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Persists the address book as a JSON snapshot at a fixed path.
///
/// The format is internal: it round-trips every field through the validated
/// serde impls but makes no cross-version or cross-tool promises.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store backed by the given path. Nothing is touched on disk
    /// until `save` or `load` is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let bytes = serde_json::to_vec(book)?;
        fs::write(&self.path, bytes)?;
        info!(path = %self.path.display(), records = book.len(), "snapshot saved");
        Ok(())
    }

    fn load(&self) -> StorageResult<LoadOutcome> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no snapshot on disk");
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => return Err(e.into()),
        };

        let book: AddressBook = serde_json::from_slice(&bytes)?;
        info!(path = %self.path.display(), records = book.len(), "snapshot loaded");
        Ok(LoadOutcome::Loaded(book))
    }
}
