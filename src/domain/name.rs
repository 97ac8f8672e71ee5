//! ContactName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's name, used as its key in the address book.
///
/// Names must be longer than one character.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name has one character or fewer.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.chars().count() <= 1 {
            return Err(ValidationError::InvalidName(name));
        }
        Ok(Self(name))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContactName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactName::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = ContactName::new("John").unwrap();
        assert_eq!(name.as_str(), "John");
        assert!(ContactName::new("Al").is_ok());
    }

    #[test]
    fn test_name_too_short() {
        assert_eq!(
            ContactName::new("J"),
            Err(ValidationError::InvalidName("J".to_string()))
        );
        assert!(ContactName::new("").is_err());
    }

    #[test]
    fn test_name_counts_characters_not_bytes() {
        // one character, two bytes
        assert!(ContactName::new("Ж").is_err());
        assert!(ContactName::new("Жа").is_ok());
    }

    #[test]
    fn test_name_deserialization_validates() {
        let result: Result<ContactName, _> = serde_json::from_str("\"x\"");
        assert!(result.is_err());

        let name: ContactName = serde_json::from_str("\"Jane\"").unwrap();
        assert_eq!(name.as_str(), "Jane");
    }
}
