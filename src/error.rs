//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors produced while executing a user command.
///
/// These never end a session: the dispatcher renders them as `Error: ...`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact with this name exists
    #[error("Contact {0} not found.")]
    ContactNotFound(String),

    /// The command was given too few arguments
    #[error("Missing arguments. Usage: {usage}")]
    MissingArguments { usage: &'static str },
}

/// Errors that can occur while loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The address book could not be encoded
    #[error("Failed to encode address book: {0}")]
    Encode(#[from] bincode::error::EncodeError),

    /// The data file exists but does not hold a valid address book
    #[error("Failed to decode address book: {0}")]
    Decode(#[from] bincode::error::DecodeError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
