//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Reply for malformed input, wrong argument counts and invalid fields.
pub const MSG_INVALID_INPUT: &str = "Give me name and phone please.";

/// Reply for a bad birthday command.
pub const MSG_INVALID_DATE: &str = "Give correct date please.";

/// Reply when a lookup failure surfaces as an error.
pub const MSG_ENTER_USER_NAME: &str = "Enter user name.";

/// Errors that can occur in address book operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressBookError {
    /// No contact with this name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

/// Errors raised by command handlers before they are turned into replies.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Wrong number of arguments for a command
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Wrong arguments or an unparseable date for a birthday command
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Repository error reaching a handler through `?`
    #[error(transparent)]
    AddressBook(#[from] AddressBookError),
}

impl CommandError {
    /// The fixed message shown to the user for this error.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => MSG_INVALID_INPUT,
            Self::InvalidDate(_) | Self::Validation(ValidationError::InvalidBirthday(_)) => {
                MSG_INVALID_DATE
            }
            Self::Validation(_) => MSG_INVALID_INPUT,
            Self::AddressBook(AddressBookError::ContactNotFound(_)) => MSG_ENTER_USER_NAME,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
