//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `DIRECTORY_API_URL` - Base URL of the collection endpoint (default: `http://localhost:8000/`)

use thiserror::Error;
use url::Url;

/// Backend origin used when `DIRECTORY_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Directory client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Collection endpoint. Always ends with `/`.
    pub base_url: Url,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `DIRECTORY_API_URL` is not a valid http(s) URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw = get_env_or_default("DIRECTORY_API_URL", DEFAULT_API_URL);
        let base_url = parse_base_url(&raw)
            .map_err(|e| ConfigError::InvalidEnvVar("DIRECTORY_API_URL".to_string(), e))?;

        Ok(Self { base_url })
    }

    /// Build a configuration for an explicit backend URL.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` naming `api_url` if the URL is invalid.
    pub fn with_base_url(raw: &str) -> Result<Self, ConfigError> {
        let base_url =
            parse_base_url(raw).map_err(|e| ConfigError::InvalidEnvVar("api_url".to_string(), e))?;
        Ok(Self { base_url })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a backend URL, requiring http(s) and a trailing slash on the path.
fn parse_base_url(raw: &str) -> Result<Url, String> {
    let mut url = Url::parse(raw).map_err(|e| e.to_string())?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);

    Ok(url)
}
