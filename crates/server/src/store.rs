//! In-memory person store.
//!
//! Records are kept in insertion order. IDs are UUID v4 strings assigned on
//! insert.

use people_directory_core::{NewPerson, Person, PersonId};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Result of a remove request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// The record was removed.
    Removed {
        person: Person,
        remaining: Vec<Person>,
    },
    /// No record has the requested ID.
    NotFound { current: Vec<Person> },
}

/// Shared person collection.
#[derive(Debug, Default)]
pub struct PersonStore {
    people: RwLock<Vec<Person>>,
}

impl PersonStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `people`.
    #[must_use]
    pub fn with_people(people: Vec<Person>) -> Self {
        Self {
            people: RwLock::new(people),
        }
    }

    /// Snapshot of all records.
    pub async fn list(&self) -> Vec<Person> {
        self.people.read().await.clone()
    }

    /// Append a record with a fresh ID. Returns it with the updated collection.
    pub async fn insert(&self, new: NewPerson) -> (Person, Vec<Person>) {
        let person = Person::from_new(generate_id(), new);

        let mut people = self.people.write().await;
        people.push(person.clone());
        (person, people.clone())
    }

    /// Remove the record with `id`.
    pub async fn remove(&self, id: &PersonId) -> Removal {
        let mut people = self.people.write().await;

        match people.iter().position(|p| &p.id == id) {
            Some(index) => {
                let person = people.remove(index);
                Removal::Removed {
                    person,
                    remaining: people.clone(),
                }
            }
            None => Removal::NotFound {
                current: people.clone(),
            },
        }
    }
}

/// Record the store starts with when demo seeding is enabled.
#[must_use]
pub fn demo_person() -> Person {
    Person::from_new(
        generate_id(),
        NewPerson::new("Milosz", "Pisulak", "student"),
    )
}

fn generate_id() -> PersonId {
    PersonId::parse(&Uuid::new_v4().to_string()).expect("UUID strings are never empty")
}
