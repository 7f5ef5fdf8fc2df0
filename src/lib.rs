//! Contact Book - a command-line address book with phone numbers and
//! upcoming birthday reminders.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone, birthday)
//! - **models**: `Record` and `AddressBook`, including the birthday window
//! - **commands**: Input parsing and command handlers
//! - **session**: The interactive read-dispatch-print loop
//! - **repositories**: Loading and saving the address book
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

// Re-export commonly used types
pub use commands::{execute, Command, Outcome};
pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, PhoneEdit, Record, UpcomingBirthday};
pub use repositories::{BookRepository, FileBookRepository};
pub use session::{run_session, Clock, FixedClock, SystemClock};
