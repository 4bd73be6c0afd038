//! API error responses.
//!
//! Errors are answered with a JSON body carrying a `message`, matching the
//! shape of successful responses.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use people_directory_core::Person;
use serde_json::json;
use thiserror::Error;

/// Application-level error type for the directory server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Delete targeted an ID that is not in the collection.
    #[error("User not found: {id}")]
    PersonNotFound {
        id: String,
        current_list: Vec<Person>,
    },

    /// Request body or path could not be understood.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "Request rejected");

        let body = match self {
            Self::PersonNotFound { current_list, .. } => json!({
                "message": "User not found. Operation failed",
                "current_list": current_list,
            }),
            Self::BadRequest(message) => json!({ "message": message }),
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
