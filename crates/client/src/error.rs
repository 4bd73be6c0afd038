//! Directory client errors.

use thiserror::Error;

/// Errors that can occur when talking to the directory backend.
///
/// Every variant is logged and swallowed by [`crate::DirectoryApp`]; callers
/// of the app never see them.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or no response was received.
    #[error("Directory request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("Directory returned status {status} for {url}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The response body was not the expected JSON.
    #[error("Directory response error: {0}")]
    Response(String),

    /// A request URL could not be built from the configured base URL.
    #[error("Invalid directory URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Map a `reqwest` send error.
    pub(crate) fn request(err: &reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }

    /// Map a `reqwest` body decode error.
    pub(crate) fn response(err: &reqwest::Error) -> Self {
        Self::Response(err.to_string())
    }
}
