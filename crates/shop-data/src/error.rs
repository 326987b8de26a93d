//! HTTP client and API error types.

use thiserror::Error;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be completed.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

/// Failure of a storefront API call, as seen by a page.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered 401; the page should send the user to log in.
    #[error("Authentication required")]
    AuthRequired,

    /// Non-2xx response. `message` comes from the error body when present.
    #[error("HTTP {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Application { status: u16, message: Option<String> },

    /// Input rejected locally; nothing was sent.
    #[error("{0}")]
    Invalid(String),

    /// A 2xx body that did not have the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message to show the user: the server's message, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Application {
                message: Some(message),
                ..
            } => message.clone(),
            ApiError::Invalid(message) => message.clone(),
            _ => fallback.to_string(),
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Application { status, .. } => Some(*status),
            ApiError::AuthRequired => Some(401),
            _ => None,
        }
    }
}

impl From<FetchError> for ApiError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::ParseError(msg) | FetchError::JsonError(msg) => ApiError::Decode(msg),
            other => ApiError::Network(other.to_string()),
        }
    }
}
