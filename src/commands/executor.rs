//! The synchronous command loop.
//!
//! Reads one line at a time, dispatches it, and reports through the
//! presentation boundary. Every failure is recovered here: validation and
//! storage errors abort only the offending command, and the loop only ends
//! on an explicit exit command or end of input (both persist first).

use crate::commands::Command;
use crate::domain::{Birthday, ContactName};
use crate::models::{AddressBook, Record, SearchCriteria};
use crate::presentation::Presenter;
use crate::storage::{LoadOutcome, SnapshotStore};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Load the book (or start empty), then run commands until exit or EOF.
///
/// Returns the final state of the book, which has already been persisted by
/// the exit path.
pub fn run<R, S, P>(mut input: R, store: &S, presenter: &mut P) -> AddressBook
where
    R: BufRead,
    S: SnapshotStore + ?Sized,
    P: Presenter + ?Sized,
{
    let mut book = load_or_empty(store, presenter);

    let mut line = String::new();
    loop {
        // interaction chrome, not presentation output
        print!("Enter a command: ");
        let _ = io::stdout().flush();

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                debug!("end of input, persisting and exiting");
                finish(store, &book, presenter);
                break;
            }
            Ok(_) => {}
            Err(e) => {
                warn!(error = %e, "failed to read command input");
                finish(store, &book, presenter);
                break;
            }
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                presenter.display_error(&e);
                continue;
            }
        };

        debug!(?command, "dispatching command");
        match command {
            Command::Hello => presenter.display_message("How can I help you?"),
            Command::Add {
                name,
                phones,
                birthday,
            } => handle_add(&mut book, presenter, &name, &phones, birthday.as_deref()),
            Command::Edit {
                name,
                old_phone,
                new_phone,
            } => handle_edit(&mut book, presenter, &name, &old_phone, &new_phone),
            Command::Search { field, value } => {
                handle_search(&book, presenter, &field, &value)
            }
            Command::ShowAll => {
                let all: Vec<&Record> = book.records().collect();
                presenter.display_contacts(&all);
            }
            Command::Save => {
                if persist(store, &book, presenter) {
                    presenter.display_message("Address book saved successfully.");
                }
            }
            Command::Exit => {
                finish(store, &book, presenter);
                break;
            }
        }
    }

    book
}

/// Hydrate the book from storage, falling back to an empty one.
///
/// A missing snapshot gets an informational message; a corrupt or unreadable
/// one gets the error plus the same fresh start. Neither is fatal.
fn load_or_empty<S, P>(store: &S, presenter: &mut P) -> AddressBook
where
    S: SnapshotStore + ?Sized,
    P: Presenter + ?Sized,
{
    match store.load() {
        Ok(LoadOutcome::Loaded(book)) => book,
        Ok(LoadOutcome::Missing) => {
            presenter.display_message("No saved address book found. Creating a new one.");
            AddressBook::new()
        }
        Err(e) => {
            warn!(error = %e, "failed to load snapshot");
            presenter.display_error(&e);
            presenter.display_message("Creating a new address book.");
            AddressBook::new()
        }
    }
}

fn handle_add<P>(
    book: &mut AddressBook,
    presenter: &mut P,
    name: &str,
    phones: &[String],
    birthday_raw: Option<&str>,
) where
    P: Presenter + ?Sized,
{
    if book.contains_name(name) {
        presenter.display_message(&format!(
            "Contact {} already exists. Use 'edit' to modify.",
            name
        ));
        return;
    }

    let birthday = match birthday_raw {
        Some(raw) => match Birthday::new(raw) {
            Ok(birthday) => Some(birthday),
            Err(e) => {
                presenter.display_error(&e);
                return;
            }
        },
        None => None,
    };

    let mut record = Record::new(ContactName::new(name), birthday);
    for phone in phones {
        if let Err(e) = record.add_phone(phone) {
            // abort the whole add, no partial record is stored
            presenter.display_error(&e);
            return;
        }
    }

    book.add_record(record);
    presenter.display_message(&format!("Contact {} added.", name));
}

fn handle_edit<P>(
    book: &mut AddressBook,
    presenter: &mut P,
    name: &str,
    old_phone: &str,
    new_phone: &str,
) where
    P: Presenter + ?Sized,
{
    match book.get_mut(name) {
        Some(record) => match record.edit_phone(old_phone, new_phone) {
            Ok(()) => presenter.display_message(&format!(
                "Phone number for {} changed to {}.",
                name, new_phone
            )),
            Err(e) => presenter.display_error(&e),
        },
        None => presenter.display_message(&format!("Contact {} not found.", name)),
    }
}

fn handle_search<P>(book: &AddressBook, presenter: &mut P, field: &str, value: &str)
where
    P: Presenter + ?Sized,
{
    let criteria = SearchCriteria::new().with_field(field, value);
    let results = book.search(&criteria);
    if results.is_empty() {
        presenter.display_message("No matching contacts found.");
    } else {
        presenter.display_contacts(&results);
    }
}

/// Save the book, reporting any storage error. Returns whether it succeeded.
fn persist<S, P>(store: &S, book: &AddressBook, presenter: &mut P) -> bool
where
    S: SnapshotStore + ?Sized,
    P: Presenter + ?Sized,
{
    match store.save(book) {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "failed to save snapshot");
            presenter.display_error(&e);
            false
        }
    }
}

/// Exit path: persist, then say goodbye either way.
fn finish<S, P>(store: &S, book: &AddressBook, presenter: &mut P)
where
    S: SnapshotStore + ?Sized,
    P: Presenter + ?Sized,
{
    if persist(store, book, presenter) {
        presenter.display_message("Address book saved. Good bye!");
    } else {
        presenter.display_message("Good bye!");
    }
}
