//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields a contact record
//! owns: its name, its phone numbers and its birthday. These value objects
//! validate at construction time so an invalid field can never be stored.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;
