//! The address book: a keyed collection of records and the unit of
//! persistence.

use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Search criteria over an address book.
///
/// Recognized fields are `name` (exact match on the record's name) and
/// `phone` (exact match against any of the record's phones). All supplied
/// criteria must hold for a record to match; fields that were never set
/// match vacuously, as do unrecognized field names passed through
/// [`with_field`](Self::with_field).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    name: Option<String>,
    phone: Option<String>,
}

impl SearchCriteria {
    /// Criteria that match every record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require an exact name match.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Require that some phone on the record equals `phone` exactly.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Add a criterion by field name, as received from user input.
    ///
    /// Unrecognized field names are ignored, not an error.
    pub fn with_field(self, field: &str, value: &str) -> Self {
        match field {
            "name" => self.with_name(value),
            "phone" => self.with_phone(value),
            _ => {
                tracing::debug!(field, "ignoring unrecognized search field");
                self
            }
        }
    }

    /// Whether the record satisfies every supplied criterion.
    pub fn matches(&self, record: &Record) -> bool {
        if let Some(ref name) = self.name {
            if record.name().as_str() != name {
                return false;
            }
        }
        if let Some(ref phone) = self.phone {
            if !record.phones().iter().any(|p| p.as_str() == phone) {
                return false;
            }
        }
        true
    }
}

/// All known contacts, keyed by name.
///
/// The map is contained, not exposed: callers get exactly the sanctioned
/// operations (add, lookup, search, iterate, and wholesale replacement on
/// load). Keys always equal the name of the record they point at.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its name, silently replacing any existing
    /// record under that name.
    pub fn add_record(&mut self, record: Record) {
        self.records
            .insert(record.name().as_str().to_string(), record);
    }

    /// Look up a record by exact name.
    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Whether a record exists under `name`.
    pub fn contains_name(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in key order. Each call starts a fresh,
    /// non-consuming traversal.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Records matching all supplied criteria, in iteration order.
    pub fn search(&self, criteria: &SearchCriteria) -> Vec<&Record> {
        self.records().filter(|r| criteria.matches(r)).collect()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::collections::btree_map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Birthday, ContactName};

    fn record_with_phones(name: &str, phones: &[&str]) -> Record {
        let mut rec = Record::new(ContactName::new(name), None);
        for phone in phones {
            rec.add_phone(phone).unwrap();
        }
        rec
    }

    #[test]
    fn test_add_record_keys_by_name() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phones("alice", &["111111111"]));

        assert!(book.contains_name("alice"));
        assert_eq!(book.get("alice").unwrap().name().as_str(), "alice");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_record_overwrites_existing_name() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phones("bob", &["111111111"]));
        book.add_record(record_with_phones("bob", &["222222222"]));

        assert_eq!(book.len(), 1);
        let phones: Vec<&str> = book
            .get("bob")
            .unwrap()
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect();
        // replaced, not merged
        assert_eq!(phones, vec!["222222222"]);
    }

    #[test]
    fn test_search_by_name_exact() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phones("alice", &["111111111"]));
        book.add_record(record_with_phones("alina", &["222222222"]));

        let results = book.search(&SearchCriteria::new().with_name("alice"));
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name().as_str(), "alice");

        let results = book.search(&SearchCriteria::new().with_name("ali"));
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_by_phone_matches_any_phone() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phones("alice", &["111111111", "333333333"]));
        book.add_record(record_with_phones("bob", &["333333333"]));
        book.add_record(record_with_phones("carol", &["222222222"]));

        let results = book.search(&SearchCriteria::new().with_phone("333333333"));
        let names: Vec<&str> = results.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[test]
    fn test_search_is_conjunctive() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phones("alice", &["111111111"]));
        book.add_record(record_with_phones("bob", &["111111111"]));

        let criteria = SearchCriteria::new()
            .with_name("alice")
            .with_phone("111111111");
        let results = book.search(&criteria);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name().as_str(), "alice");

        let criteria = SearchCriteria::new()
            .with_name("alice")
            .with_phone("999999999");
        assert!(book.search(&criteria).is_empty());
    }

    #[test]
    fn test_unrecognized_search_field_is_ignored() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phones("alice", &["111111111"]));
        book.add_record(record_with_phones("bob", &["222222222"]));

        let criteria = SearchCriteria::new().with_field("email", "x@example.com");
        assert_eq!(criteria, SearchCriteria::new());
        // vacuously true for every record
        assert_eq!(book.search(&criteria).len(), 2);
    }

    #[test]
    fn test_iteration_is_restartable() {
        let mut book = AddressBook::new();
        book.add_record(record_with_phones("alice", &["111111111"]));
        book.add_record(record_with_phones("bob", &["222222222"]));

        assert_eq!(book.records().count(), 2);
        assert_eq!(book.records().count(), 2);

        let names: Vec<&str> = (&book).into_iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
    }

    #[test]
    fn test_book_serialization_round_trip() {
        let mut book = AddressBook::new();
        let mut rec = Record::new(
            ContactName::new("ada"),
            Some(Birthday::new("1990-06-15").unwrap()),
        );
        rec.add_phone("123456789").unwrap();
        book.add_record(rec);
        book.add_record(record_with_phones("bob", &["987654321"]));

        let json = serde_json::to_string(&book).unwrap();
        let back: AddressBook = serde_json::from_str(&json).unwrap();
        assert_eq!(back, book);
    }
}
