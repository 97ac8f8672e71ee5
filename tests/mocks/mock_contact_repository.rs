use assistant_bot::error::{AddressBookError, AddressBookResult};
use assistant_bot::models::Record;
use assistant_bot::repositories::ContactRepository;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared view of the calls made against a mock repository.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct CallLog(Rc<RefCell<HashMap<String, usize>>>);

#[allow(dead_code)]
impl CallLog {
    /// Get the number of times a method was called.
    pub fn count(&self, method: &str) -> usize {
        *self.0.borrow().get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset(&self) {
        self.0.borrow_mut().clear();
    }

    fn track(&self, method: &str) {
        *self.0.borrow_mut().entry(method.to_string()).or_insert(0) += 1;
    }
}

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// seeded with records and tracks method calls for verification. The call
/// log stays readable after the mock is handed to the bot.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    records: HashMap<String, Record>,
    calls: CallLog,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record without counting a call.
    pub fn with_record(mut self, record: Record) -> Self {
        self.records.insert(record.name().to_string(), record);
        self
    }

    /// Handle to the call counts.
    pub fn calls(&self) -> CallLog {
        self.calls.clone()
    }
}

impl ContactRepository for MockContactRepository {
    fn add_record(&mut self, record: Record) {
        self.calls.track("add_record");
        self.records.insert(record.name().to_string(), record);
    }

    fn find(&self, name: &str) -> Option<&Record> {
        self.calls.track("find");
        self.records.get(name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.calls.track("find_mut");
        self.records.get_mut(name)
    }

    fn delete(&mut self, name: &str) -> AddressBookResult<Record> {
        self.calls.track("delete");
        self.records
            .remove(name)
            .ok_or_else(|| AddressBookError::ContactNotFound(name.to_string()))
    }

    fn records(&self) -> Vec<&Record> {
        self.calls.track("records");
        let mut records: Vec<&Record> = self.records.values().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records
    }
}
