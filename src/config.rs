//! Configuration management for the address book assistant.
//!
//! Settings come from environment variables, optionally seeded from a
//! `.env` file in the working directory. Nothing here is required: every
//! setting has a default.

use crate::book::UPCOMING_BIRTHDAY_DAYS;
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Largest accepted birthday window, one leap year.
pub const MAX_UPCOMING_BIRTHDAY_DAYS: u32 = 366;

/// Configuration for the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Inclusive window in days reported by the `birthdays` command (default: 7)
    pub upcoming_birthday_days: u32,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `UPCOMING_BIRTHDAY_DAYS`: birthday window in days, 0-366 (default: 7)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let upcoming_birthday_days =
            Self::parse_env_u32("UPCOMING_BIRTHDAY_DAYS", UPCOMING_BIRTHDAY_DAYS)?;

        if upcoming_birthday_days > MAX_UPCOMING_BIRTHDAY_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_BIRTHDAY_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_UPCOMING_BIRTHDAY_DAYS),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            upcoming_birthday_days,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            upcoming_birthday_days: UPCOMING_BIRTHDAY_DAYS,
            log_level: "error".to_string(),
        }
    }
}
