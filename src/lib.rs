//! Rolodex - a command-line contact manager with validated fields and
//! snapshot persistence.
//!
//! Contacts are records of a name, phone numbers, and an optional birthday.
//! Field values are validated at construction time and again when a snapshot
//! is read back, so invalid data cannot exist in memory or survive a restart.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: the Record aggregate and the AddressBook collection
//! - **storage**: wholesale snapshot persistence behind a trait
//! - **presentation**: the four-operation boundary to the user
//! - **commands**: line parsing and the synchronous dispatch loop
//! - **config**: environment-driven configuration
//! - **error**: custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod presentation;
pub mod storage;

pub use commands::Command;
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, SearchCriteria};
pub use presentation::{ConsolePresenter, Presenter};
pub use storage::{FileSnapshotStore, LoadOutcome, SnapshotStore};
