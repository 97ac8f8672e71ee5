use crate::error::AddressBookResult;
use crate::models::Record;
use crate::services::{birthdays_per_week, BirthdayReport};
use chrono::NaiveDate;

/// Repository for managing contact records.
///
/// Provides abstraction over record storage so the command handlers can be
/// exercised against a mock.
pub trait ContactRepository {
    /// Insert a record, replacing any record with the same name.
    fn add_record(&mut self, record: Record);

    /// Look up a record by name.
    fn find(&self, name: &str) -> Option<&Record>;

    /// Look up a record by name for modification.
    fn find_mut(&mut self, name: &str) -> Option<&mut Record>;

    /// Remove a record by name, returning it.
    fn delete(&mut self, name: &str) -> AddressBookResult<Record>;

    /// All records, ordered by name.
    fn records(&self) -> Vec<&Record>;

    /// Bucket upcoming birthdays of all records into weekdays.
    fn birthdays_per_week(&self, today: NaiveDate) -> BirthdayReport {
        birthdays_per_week(
            today,
            self.records()
                .into_iter()
                .map(|r| (r.name(), r.birthday.map(|b| b.date()))),
        )
    }
}
