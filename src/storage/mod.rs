//! Snapshot persistence for the address book.
//!
//! The address book is saved and loaded wholesale as an opaque snapshot.
//! The [`SnapshotStore`] trait abstracts the handle so the command loop can
//! be tested against an in-memory double.

pub mod file_store;
pub mod traits;

pub use file_store::FileSnapshotStore;
pub use traits::{LoadOutcome, SnapshotStore};
