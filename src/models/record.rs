//! Contact record: one person's name, phones, and optional birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationError};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact entry.
///
/// The name is fixed at construction; phones and the birthday are the
/// mutable parts. Phones keep insertion order and may contain duplicates;
/// edit and remove act on the first match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    name: ContactName,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    birthday: Option<Birthday>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a record with a name and an optional birthday, and no phones.
    pub fn new(name: ContactName, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            birthday,
            phones: Vec::new(),
        }
    }

    /// The contact's name. Immutable for the record's lifetime; the address
    /// book uses it as the key.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The contact's birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// The contact's phone numbers in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate, normalize, and append a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input does not
    /// normalize to exactly 9 digits; the phone list is left unchanged.
    pub fn add_phone(&mut self, raw: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose stored value equals `value`.
    ///
    /// Silently does nothing when no phone matches.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == value) {
            self.phones.remove(pos);
        }
    }

    /// Replace the first phone equal to `old` with a freshly validated `new`.
    ///
    /// When no phone matches `old`, this is a no-op and `new` is not
    /// validated (nothing would change either way).
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` fails validation;
    /// the phone list is left unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == old) {
            let phone = PhoneNumber::new(new)?;
            self.phones[pos] = phone;
        }
        Ok(())
    }

    /// Days until the next occurrence of this contact's birthday, counted
    /// from today's local date. `None` when no birthday is set.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Like [`days_to_birthday`](Self::days_to_birthday) but counted from an
    /// explicit date, for deterministic callers and tests.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().map(|b| b.days_until_next(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}", self.name)?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        let phones: Vec<&str> = self.phones.iter().map(|p| p.as_str()).collect();
        write!(f, ", Phones: {}", phones.join(", "))
    }
}
