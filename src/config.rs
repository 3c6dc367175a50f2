//! Configuration management for the rolodex CLI.
//!
//! Configuration comes from environment variables, with an optional `.env`
//! file loaded first. Everything has a default, so the tool runs with no
//! configuration at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default snapshot location, relative to the working directory.
const DEFAULT_STORAGE_PATH: &str = "address_book.json";

/// Configuration for the rolodex CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the snapshot file (default: `address_book.json`)
    pub storage_path: PathBuf,

    /// Log level for stderr diagnostics (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ROLODEX_STORAGE_PATH`: snapshot file path (default: `address_book.json`)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; its absence is fine.
        let _ = dotenvy::dotenv();

        let storage_path = match env::var("ROLODEX_STORAGE_PATH") {
            Ok(val) => {
                if val.trim().is_empty() {
                    return Err(ConfigError::InvalidValue {
                        var: "ROLODEX_STORAGE_PATH".to_string(),
                        reason: "Cannot be empty".to_string(),
                    });
                }
                PathBuf::from(val)
            }
            Err(_) => PathBuf::from(DEFAULT_STORAGE_PATH),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            storage_path,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            log_level: "error".to_string(),
        }
    }
}
