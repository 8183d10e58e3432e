//! Data models for address book entries.
//!
//! A record is one contact's complete stored information: the name it is
//! filed under, its phone numbers and an optional birthday.

pub mod record;

pub use record::Record;
