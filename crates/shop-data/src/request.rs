//! HTTP request builder.

use std::collections::HashMap;

use http::Method;
use serde::Serialize;

use crate::FetchError;

/// A request ready to hand to a [`Transport`](crate::Transport).
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<Vec<u8>>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the request body as raw bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        let json = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Path and query of the URL, without scheme and host.
    pub fn path_and_query(&self) -> &str {
        let url = self.url.as_str();
        let after_scheme = url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(url);
        if after_scheme.len() == url.len() {
            return url;
        }
        after_scheme
            .find('/')
            .map(|idx| &after_scheme[idx..])
            .unwrap_or("/")
    }

    /// Path of the URL without the query string.
    pub fn path(&self) -> &str {
        let pq = self.path_and_query();
        pq.split_once('?').map(|(path, _)| path).unwrap_or(pq)
    }

    /// Query string of the URL, empty when there is none.
    pub fn query(&self) -> &str {
        self.url.split_once('?').map(|(_, qs)| qs).unwrap_or("")
    }

    /// Get a header value, case-insensitively.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Request body parsed as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_slice(b).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_parts() {
        let req = RequestBuilder::new(
            Method::GET,
            "http://localhost:5000/api/products?limit=50&offset=0",
        );
        assert_eq!(req.path_and_query(), "/api/products?limit=50&offset=0");
        assert_eq!(req.path(), "/api/products");
        assert_eq!(req.query(), "limit=50&offset=0");
    }

    #[test]
    fn test_relative_url_parts() {
        let req = RequestBuilder::new(Method::DELETE, "/api/cart/items/3");
        assert_eq!(req.path(), "/api/cart/items/3");
        assert_eq!(req.query(), "");
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let req = RequestBuilder::new(Method::POST, "/api/cart/items")
            .json(&serde_json::json!({"product_id": 1, "quantity": 2}))
            .unwrap();
        assert_eq!(req.header_value("content-type"), Some("application/json"));
        assert_eq!(req.json_body().unwrap()["quantity"], 2);
    }
}
