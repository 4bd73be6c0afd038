//! Person records.

use serde::{Deserialize, Serialize};

use super::id::PersonId;

/// A person record as stored by the directory server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Server-assigned identifier.
    pub id: PersonId,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl Person {
    /// Build a stored record from a create payload and a freshly assigned ID.
    #[must_use]
    pub fn from_new(id: PersonId, new: NewPerson) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            role: new.role,
        }
    }
}

/// Payload of a create request. The server assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

impl NewPerson {
    /// Create a new payload.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            role: role.into(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_person_wire_shape() {
        let body = serde_json::to_value(NewPerson::new("Ada", "Lovelace", "admin")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "role": "admin"
            })
        );
    }

    #[test]
    fn test_person_ignores_unknown_fields() {
        let person: Person = serde_json::from_str(
            r#"{"id":"p-1","first_name":"Ada","last_name":"Lovelace","role":"admin","extra":true}"#,
        )
        .unwrap();
        assert_eq!(person.id.as_str(), "p-1");
        assert_eq!(
            person,
            Person::from_new(person.id.clone(), NewPerson::new("Ada", "Lovelace", "admin"))
        );
    }

    #[test]
    fn test_person_requires_id() {
        let result: Result<Person, _> =
            serde_json::from_str(r#"{"first_name":"Ada","last_name":"Lovelace","role":"admin"}"#);
        assert!(result.is_err());
    }
}
