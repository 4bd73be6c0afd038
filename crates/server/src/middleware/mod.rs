//! HTTP middleware stack for the directory server.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, only when a DSN is configured)
//! 2. CORS (any origin, answers preflight requests)
//! 3. `TraceLayer` (request span)
//! 4. Request correlation (`x-request-id`)

pub mod request_id;

use axum::extract::Request;
use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};
use tracing::Span;

pub use request_id::{REQUEST_ID_HEADER, correlate_request};

/// CORS policy for browser clients served from another origin.
#[must_use]
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

/// Span for one HTTP request. `request_id` is filled in by [`correlate_request`].
pub fn make_request_span(request: &Request) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = tracing::field::Empty,
    )
}
