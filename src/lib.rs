//! Address Book - an interactive command-line assistant for contacts.
//!
//! The library stores names, phone numbers and birthdays in memory, supports
//! lookup and mutation, and reports contacts whose birthday falls within the
//! next week.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record that owns those values
//! - **book**: The address book keyed by contact name, with the
//!   upcoming-birthday query
//! - **commands**: Command operations that turn book outcomes into replies
//! - **shell**: The interactive read-eval-print loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod shell;

pub use book::{AddressBook, UPCOMING_BIRTHDAY_DAYS};
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError, ConfigResult};
pub use models::Record;
pub use shell::Shell;
