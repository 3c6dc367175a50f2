//! Error types for the rolodex CLI.
//!
//! This module defines custom error types using `thiserror` for precise error
//! handling. Field-level validation errors live in [`crate::domain::errors`].

use thiserror::Error;

/// Errors that can occur while reading or writing the snapshot file.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Underlying file I/O failed
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The snapshot could not be encoded or decoded
    #[error("snapshot format error: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Errors produced while parsing a command line.
///
/// These are always recovered by the dispatch loop and reported through the
/// presentation boundary; they never terminate the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command word was not recognized
    #[error("Invalid command. Please try again.")]
    Unknown(String),

    /// A recognized command was missing arguments
    #[error("Usage: {0}")]
    Usage(&'static str),
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
