//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is too short.
    InvalidName(String),

    /// The provided phone number is not ten digits.
    InvalidPhone(String),

    /// The provided birthday is not a `DD.MM.YYYY` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(name) => write!(f, "Invalid name: {:?}", name),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidBirthday(value) => {
                write!(f, "Birthday must be in DD.MM.YYYY format, got: {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
