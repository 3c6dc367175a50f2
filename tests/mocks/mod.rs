//! Test doubles for the presentation boundary and the snapshot store.

#![allow(dead_code)]

use rolodex::error::StorageResult;
use rolodex::models::{AddressBook, Record};
use rolodex::presentation::Presenter;
use rolodex::storage::{LoadOutcome, SnapshotStore};
use std::fmt;
use std::io;

/// Presenter that records everything it is asked to display.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub messages: Vec<String>,
    pub contacts: Vec<String>,
    pub errors: Vec<String>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if any recorded message contains `needle`.
    pub fn saw_message(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    /// True if any recorded error contains `needle`.
    pub fn saw_error(&self, needle: &str) -> bool {
        self.errors.iter().any(|e| e.contains(needle))
    }
}

impl Presenter for RecordingPresenter {
    fn display_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }

    fn display_contact(&mut self, contact: &Record) {
        self.contacts.push(contact.to_string());
    }

    fn display_contacts(&mut self, contacts: &[&Record]) {
        for contact in contacts {
            self.contacts.push(contact.to_string());
        }
    }

    fn display_error(&mut self, error: &dyn fmt::Display) {
        self.errors.push(error.to_string());
    }
}

/// Store whose saves always fail, for exercising the error-reporting path.
pub struct FailingSnapshotStore;

impl SnapshotStore for FailingSnapshotStore {
    fn save(&self, _book: &AddressBook) -> StorageResult<()> {
        Err(io::Error::new(io::ErrorKind::Other, "disk full").into())
    }

    fn load(&self) -> StorageResult<LoadOutcome> {
        Ok(LoadOutcome::Missing)
    }
}
