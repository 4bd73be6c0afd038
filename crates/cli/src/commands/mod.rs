//! CLI command implementations.

pub mod people;
