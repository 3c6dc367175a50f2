//! Rolodex - Main entry point
//!
//! Wires the console presenter, the file-backed snapshot store, and stdin
//! into the synchronous command loop.

use anyhow::Result;
use rolodex::presentation::ConsolePresenter;
use rolodex::storage::FileSnapshotStore;
use rolodex::{commands, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only, so stdout stays clean for the user)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting rolodex with snapshot at {}",
        config.storage_path.display()
    );

    let store = FileSnapshotStore::new(&config.storage_path);
    let mut presenter = ConsolePresenter::stdout();
    let stdin = io::stdin();

    let book = commands::run(stdin.lock(), &store, &mut presenter);

    info!(records = book.len(), "rolodex shutdown complete");
    Ok(())
}
