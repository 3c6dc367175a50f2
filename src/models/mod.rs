//! Data models for the address book.
//!
//! This module contains the contact record aggregate and the address book
//! collection built on top of the domain value objects.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, SearchCriteria};
pub use record::Record;
