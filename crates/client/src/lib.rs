//! People Directory Client.
//!
//! Models the directory page as explicit state and keeps the rendered list in
//! sync with the backend collection.
//!
//! # Components
//!
//! - [`consent`] - Enables the submit control only while the privacy policy is accepted
//! - [`app`] - Form binding and the mutate-then-refresh flow
//! - [`directory`] - HTTP client for the collection endpoint
//! - [`render`] - Rebuilds the `user-list` container from a fetched collection
//!
//! # Flow
//!
//! 1. [`DirectoryApp::init`] runs the consent gate and fetches the collection
//! 2. A submit click reads the form and creates a record
//! 3. After every successful create or delete the full collection is fetched again
//! 4. The renderer replaces the list with the fetched collection
//!
//! Failures are logged through `tracing` and never propagate out of the app.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod config;
pub mod consent;
pub mod directory;
pub mod error;
pub mod page;
pub mod render;

pub use app::{DirectoryApp, Outcome, UiEvent};
pub use config::{ClientConfig, ConfigError};
pub use directory::{Directory, HttpDirectory};
pub use error::ClientError;
pub use page::{
    Checkbox, ClickEvent, DeleteButton, ListItem, Page, PersonForm, SubmitButton, UserList,
};
