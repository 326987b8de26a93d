//! HTTP response handling.

use std::collections::HashMap;

use http::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::FetchError;

/// An HTTP response. Non-2xx statuses are ordinary responses, not errors.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

/// `{"error": ...}` envelope. Both `{"error": {"message": "..."}}` and
/// `{"error": "..."}` are sent by the storefront API.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Text(String),
    Structured {
        #[serde(default)]
        message: Option<String>,
    },
}

impl Response {
    /// Create a new response.
    pub fn new(status: StatusCode, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Response with a JSON body.
    pub fn json_body(status: StatusCode, value: &serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self::new(status, headers, value.to_string().into_bytes())
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Check for 401.
    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::ParseError(e.to_string()))
    }

    /// Parse the body as JSON, falling back to an empty object.
    pub fn json_or_empty(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body)
            .unwrap_or_else(|_| serde_json::Value::Object(serde_json::Map::new()))
    }

    /// Error message carried in the body, if any.
    pub fn error_message(&self) -> Option<String> {
        let envelope: ErrorEnvelope = serde_json::from_slice(&self.body).ok()?;
        let message = match envelope.error {
            ErrorDetail::Text(text) => Some(text),
            ErrorDetail::Structured { message } => message,
        };
        message.filter(|m| !m.trim().is_empty())
    }

    /// Get a header value.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
