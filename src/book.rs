//! The address book: every record, keyed by contact name.
//!
//! Records live only inside the book. Lookups are exact and
//! case-sensitive, and iteration follows insertion order.

use crate::models::Record;
use chrono::NaiveDate;
use indexmap::IndexMap;

/// Inclusive window, in days, for [`AddressBook::get_upcoming_birthdays`].
pub const UPCOMING_BIRTHDAY_DAYS: u32 = 7;

/// Collection of all records, keyed by name.
///
/// Invariant: every key equals the name of the record stored under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name.
    ///
    /// An existing record with the same name is replaced in full and keeps
    /// its position in iteration order. The replaced record is returned.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        tracing::debug!(name = %key, "Storing record");
        let replaced = self.records.insert(key, record);
        if replaced.is_some() {
            tracing::debug!("Existing record replaced");
        }
        replaced
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record called `name`, if present.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            tracing::debug!(name = %name, "Record deleted");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Records whose next birthday is at most seven days after `reference`.
    pub fn get_upcoming_birthdays(&self, reference: NaiveDate) -> Vec<&Record> {
        self.upcoming_birthdays_within(reference, UPCOMING_BIRTHDAY_DAYS)
    }

    /// Records whose next birthday falls within `[0, days]` days of
    /// `reference`, in insertion order. Records without a birthday are
    /// skipped.
    pub fn upcoming_birthdays_within(&self, reference: NaiveDate, days: u32) -> Vec<&Record> {
        let window = i64::from(days);
        self.iter()
            .filter(|record| {
                record
                    .days_to_birthday(reference)
                    .is_some_and(|d| (0..=window).contains(&d))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}
