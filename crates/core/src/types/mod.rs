//! Core types for the people directory.
//!
//! This module provides the wire types for directory records.

pub mod id;
pub mod person;

pub use id::{PersonId, PersonIdError};
pub use person::{NewPerson, Person};
