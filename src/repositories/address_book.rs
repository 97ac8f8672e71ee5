//! In-memory address book.

use super::traits::ContactRepository;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::Record;
use std::collections::BTreeMap;
use tracing::debug;

/// Address book keyed by contact name.
///
/// Backed by a `BTreeMap` so listings come out in name order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book has no contacts.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ContactRepository for AddressBook {
    fn add_record(&mut self, record: Record) {
        let name = record.name().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            debug!(name = %name, "replaced existing contact");
        }
    }

    fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    fn delete(&mut self, name: &str) -> AddressBookResult<Record> {
        self.records
            .remove(name)
            .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))
    }

    fn records(&self) -> Vec<&Record> {
        self.records.values().collect()
    }
}
