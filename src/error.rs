//! Error types for the BonVoyage client.

use thiserror::Error;

/// Result type for BonVoyage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the BonVoyage client.
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was empty.
    #[error("Missing required argument `{name}`")]
    MissingArgument {
        /// Name of the offending parameter
        name: &'static str,
    },

    /// A numeric argument fell outside its allowed range.
    #[error("Argument `{name}` out of range ({value}): {message}")]
    OutOfRange {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: u32,
        /// The violated bound
        message: &'static str,
    },

    /// The API returned an error response.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Foursquare `errorType`, when present
        error_type: Option<String>,
        /// Error message
        message: String,
    },

    /// The client credentials were rejected.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Access forbidden.
    #[error("Access forbidden: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The hourly request quota was exhausted.
    #[error("Rate limited: {message}")]
    RateLimit {
        /// Error message
        message: String,
    },

    /// The response envelope did not contain the expected field.
    #[error("Response is missing `{path}`")]
    MissingField {
        /// Dotted path of the absent field
        path: &'static str,
    },

    /// Network or HTTP error.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The transport was used after its context was disposed.
    #[error("Transport has been disposed")]
    Disposed,

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for Error {
    // Timeouts surface the same way whether they hit the send or the body read.
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Timeout
        } else {
            Error::Http(e)
        }
    }
}

impl Error {
    /// Create an API error from a non-success response.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();

        let meta = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.meta);
        let (message, error_type) = match meta {
            Some(meta) => (
                meta.error_detail.unwrap_or_else(|| "Unknown error".into()),
                meta.error_type,
            ),
            None => ("Unknown error".into(), None),
        };

        Self::from_status(status, error_type, message)
    }

    fn from_status(status: u16, error_type: Option<String>, message: String) -> Self {
        match status {
            401 => Error::Authentication(message),
            403 => Error::Forbidden(message),
            404 => Error::NotFound(message),
            429 => Error::RateLimit { message },
            _ => Error::Api {
                status,
                error_type,
                message,
            },
        }
    }
}

#[derive(serde::Deserialize)]
struct ErrorResponse {
    meta: Option<ErrorMeta>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorMeta {
    error_type: Option<String>,
    error_detail: Option<String>,
}
