//! People Directory Server library.
//!
//! This crate provides the directory backend as a library, allowing it to be
//! tested and embedded.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

use axum::Router;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the complete application router.
///
/// Layer order, outermost first: CORS, request tracing, request correlation.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .with_state(state.clone())
        .layer(axum::middleware::from_fn_with_state(
            state,
            middleware::correlate_request,
        ))
        .layer(TraceLayer::new_for_http().make_span_with(middleware::make_request_span))
        .layer(middleware::cors_layer())
}
