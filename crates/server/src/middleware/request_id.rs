//! Request correlation.
//!
//! Every request to the directory carries an `x-request-id`. A well-formed ID
//! from an upstream proxy is kept; anything else is replaced with a fresh
//! UUID v4. The ID is recorded on the request span, echoed in the response
//! and, when error reporting is configured, attached to the Sentry scope.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

use crate::state::AppState;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream ID accepted as-is.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Pick the correlation ID for a request.
///
/// Upstream IDs must be non-empty, at most 128 bytes and made of visible
/// ASCII characters.
#[must_use]
pub fn request_id_from(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| is_valid_request_id(id))
        .map_or_else(|| Uuid::new_v4().to_string(), str::to_owned)
}

fn is_valid_request_id(id: &str) -> bool {
    !id.is_empty() && id.len() <= MAX_REQUEST_ID_LEN && id.bytes().all(|b| b.is_ascii_graphic())
}

/// Tag the request with its correlation ID.
pub async fn correlate_request(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let request_id = request_id_from(request.headers());

    Span::current().record("request_id", request_id.as_str());

    if state.config().sentry_dsn.is_some() {
        sentry::configure_scope(|scope| scope.set_tag("request_id", &request_id));
    }

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
