//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::{PersonStore, demo_person};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the person store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    store: PersonStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The store starts empty, or with one demo record when
    /// `config.seed_demo` is set.
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let store = if config.seed_demo {
            PersonStore::with_people(vec![demo_person()])
        } else {
            PersonStore::new()
        };
        Self::with_store(config, store)
    }

    /// Create a state around an existing store.
    #[must_use]
    pub fn with_store(config: ServerConfig, store: PersonStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the person store.
    #[must_use]
    pub fn store(&self) -> &PersonStore {
        &self.inner.store
    }
}
