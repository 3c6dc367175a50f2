//! The presentation boundary.
//!
//! The core talks to the user through exactly four operations; anything that
//! implements [`Presenter`] (console, GUI, test double) is interchangeable.
//! No formatting is promised beyond "human-readable".

use crate::models::Record;
use std::fmt;
use std::io::{self, Write};

/// Capability interface the core uses to reach the user.
pub trait Presenter {
    /// Show a plain informational message.
    fn display_message(&mut self, message: &str);

    /// Show a single contact.
    fn display_contact(&mut self, contact: &Record);

    /// Show a sequence of contacts.
    fn display_contacts(&mut self, contacts: &[&Record]);

    /// Show an error.
    fn display_error(&mut self, error: &dyn fmt::Display);
}

/// Console implementation writing to any `io::Write` sink.
///
/// Display failures on a console are not actionable, so write errors are
/// swallowed rather than propagated into the core.
pub struct ConsolePresenter<W: Write> {
    out: W,
}

impl ConsolePresenter<io::Stdout> {
    /// Presenter over standard output.
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsolePresenter<W> {
    /// Presenter over an arbitrary sink.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the presenter and return the sink.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn display_message(&mut self, message: &str) {
        let _ = writeln!(self.out, "{}", message);
    }

    fn display_contact(&mut self, contact: &Record) {
        let _ = writeln!(self.out, "{}", contact);
    }

    fn display_contacts(&mut self, contacts: &[&Record]) {
        for contact in contacts {
            let _ = writeln!(self.out, "{}", contact);
        }
    }

    fn display_error(&mut self, error: &dyn fmt::Display) {
        let _ = writeln!(self.out, "Error: {}", error);
    }
}
