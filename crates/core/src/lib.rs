//! People Directory Core - Shared types library.
//!
//! This crate provides the record types exchanged between the directory
//! components:
//! - `server` - In-memory JSON backend holding the collection
//! - `client` - Page model and HTTP client that renders the collection
//! - `cli` - Command-line driver for the client
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used on both sides of the wire.
//!
//! # Modules
//!
//! - [`types`] - Person records, the create payload, and the opaque person ID

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
