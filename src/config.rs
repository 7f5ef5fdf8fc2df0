//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Nothing here prints to stdout, which belongs to the interactive
//! session.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Data file used when `CONTACT_BOOK_FILE` is not set.
pub const DEFAULT_DATA_FILE: &str = "addressbook.bin";

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the binary address book file (default: "addressbook.bin")
    pub data_file: PathBuf,

    /// Log filter used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_FILE`: Path of the data file (default: "addressbook.bin")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // dotenvy::dotenv() doesn't print to stdout
        let _ = dotenvy::dotenv();

        let data_file = match env::var("CONTACT_BOOK_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_BOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(env::VarError::NotPresent) => PathBuf::from(DEFAULT_DATA_FILE),
            Err(env::VarError::NotUnicode(_)) => {
                return Err(ConfigError::Other(
                    "CONTACT_BOOK_FILE is not valid unicode".to_string(),
                ));
            }
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            data_file,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: "error".to_string(),
        }
    }
}
