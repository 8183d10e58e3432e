//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, PhoneNumber, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: one name, any number of phone numbers and at most one birthday.
///
/// Phone numbers keep insertion order and may repeat. Every field is a
/// validated value object, so a record can only ever hold well-formed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it. Duplicates are kept.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Unknown numbers are ignored.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|p| p.as_str() != phone);
    }

    /// Replace `old` with `new`.
    ///
    /// All entries equal to `old` are removed before `new` is validated and
    /// appended. When `new` is invalid the error is returned and the removal
    /// stays in effect.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        tracing::debug!(name = %self.name, old = %old, new = %new, "Editing phone");
        self.remove_phone(old);
        self.add_phone(new)
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Parse and store a birthday, replacing any previous one.
    pub fn add_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::parse(value)?);
        Ok(())
    }

    /// Days from `reference` to this contact's next birthday.
    ///
    /// Returns `None` when no birthday is set.
    pub fn days_to_birthday(&self, reference: NaiveDate) -> Option<i64> {
        self.birthday.as_ref()?.days_until(reference)
    }

    /// Phone numbers joined with `", "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let birthday = match &self.birthday {
            Some(birthday) => birthday.to_display_string(),
            None => "Not set".to_string(),
        };
        write!(
            f,
            "Name: {}, Phones: {}, Birthday: {}",
            self.name,
            self.phones_display(),
            birthday
        )
    }
}
