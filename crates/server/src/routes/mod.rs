//! HTTP route handlers for the directory server.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health   - Health check
//!
//! # Collection
//! GET    /         - List all people
//! POST   /         - Create a person (JSON body)
//! DELETE /{id}     - Delete a person
//! ```
//!
//! CORS preflight (`OPTIONS`) is answered by the CORS layer.

pub mod people;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the collection routes router.
pub fn people_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(people::list).post(people::create))
        .route("/{id}", axum::routing::delete(people::remove))
}

/// Create all routes for the directory server.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(people_routes())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}
