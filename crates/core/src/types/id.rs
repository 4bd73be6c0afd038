//! Opaque person identifier.
//!
//! The server assigns every record an identifier when it is created. Clients
//! never construct or interpret one; they only echo it back on delete.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PersonId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PersonIdError {
    /// The input string is empty.
    #[error("person id cannot be empty")]
    Empty,
}

/// Server-assigned identifier of a person record.
///
/// Stored as an opaque string. The reference server issues UUID v4 values,
/// but nothing on the client side depends on that format.
///
/// ## Examples
///
/// ```
/// use people_directory_core::PersonId;
///
/// let id = PersonId::parse("4f1c2a6e-1b0f-4e57-9a53-3f1f2d0c9b11").unwrap();
/// assert_eq!(id.as_str(), "4f1c2a6e-1b0f-4e57-9a53-3f1f2d0c9b11");
///
/// assert!(PersonId::parse("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(String);

impl PersonId {
    /// Parse a non-empty identifier.
    ///
    /// # Errors
    ///
    /// Returns [`PersonIdError::Empty`] if the input is empty.
    pub fn parse(s: &str) -> Result<Self, PersonIdError> {
        if s.is_empty() {
            return Err(PersonIdError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PersonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::str::FromStr for PersonId {
    type Err = PersonIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!(PersonId::parse(""), Err(PersonIdError::Empty));
    }

    #[test]
    fn test_display_is_raw_value() {
        let id = PersonId::parse("abc-123").unwrap();
        assert_eq!(id.to_string(), "abc-123");
    }

    #[test]
    fn test_serializes_as_bare_string() {
        let id: PersonId = "abc-123".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc-123\"");

        let back: PersonId = serde_json::from_str("\"abc-123\"").unwrap();
        assert_eq!(back, id);
    }
}
