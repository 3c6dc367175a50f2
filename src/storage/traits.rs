use crate::error::StorageResult;
use crate::models::AddressBook;

/// Result of attempting to load a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// A snapshot existed and was decoded into an address book.
    Loaded(AddressBook),

    /// No snapshot exists at the handle. Not an error: the caller starts
    /// with an empty book and reports a diagnostic.
    Missing,
}

/// Store for whole-book snapshots.
///
/// The snapshot is opaque and wholesale: `save` overwrites everything at the
/// handle, `load` replaces the in-memory book entirely. Abstracting the store
/// lets tests substitute an in-memory double for the file-backed one.
pub trait SnapshotStore {
    /// Serialize the entire book to the handle, overwriting prior content.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;

    /// Read the snapshot back, or report that none exists.
    fn load(&self) -> StorageResult<LoadOutcome>;
}
