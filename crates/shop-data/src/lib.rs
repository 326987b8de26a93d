//! HTTP client utilities for the storefront.
//!
//! Provides a small builder API over a pluggable [`Transport`] plus
//! [`StorefrontApi`], a typed client for the storefront REST endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shop_data::{FetchClient, HttpTransport, StorefrontApi};
//! use shop_commerce::prelude::*;
//!
//! let transport = Arc::new(HttpTransport::new(HttpTransport::DEFAULT_TIMEOUT)?);
//! let client = FetchClient::new(transport).with_base_url("http://localhost:5000");
//! let api = StorefrontApi::new(client);
//!
//! let products = api.list_products(&SearchQuery::new().with_query("rose")).await?;
//! ```

mod api;
mod error;
mod request;
mod response;
mod transport;

use std::collections::HashMap;
use std::sync::Arc;

pub use api::StorefrontApi;
pub use error::{ApiError, FetchError};
pub use http::{Method, StatusCode};
pub use request::RequestBuilder;
pub use response::Response;
pub use transport::{HttpTransport, StubReply, StubTransport, Transport};

/// HTTP client for making outbound requests.
///
/// Joins relative paths onto a base URL and adds default headers (such as
/// the session cookie) to every request.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn Transport>,
    base_url: Option<String>,
    default_headers: HashMap<String, String>,
}

impl FetchClient {
    /// Create a new HTTP client over a transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            base_url: None,
            default_headers: HashMap::new(),
        }
    }

    /// Create a client with a base URL that will be prepended to all requests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a default header that will be included in all requests.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    /// Create a POST request.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    /// Create a PATCH request.
    pub fn patch(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::PATCH, url)
    }

    /// Create a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }

    /// Create a request with a custom method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!("{}{}", base.trim_end_matches('/'), url)
                }
            }
            None => url,
        };

        let mut builder = RequestBuilder::new(method, full_url).accept("application/json");
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder
    }

    /// Send a request through the transport.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let method = request.method().clone();
        let url = request.url().to_string();
        tracing::debug!(%method, %url, "sending request");

        match self.transport.send(request).await {
            Ok(response) => {
                tracing::debug!(%method, %url, status = response.status.as_u16(), "received response");
                Ok(response)
            }
            Err(e) => {
                tracing::debug!(%method, %url, error = %e, "request failed");
                Err(e)
            }
        }
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{ApiError, FetchClient, FetchError, Response, StorefrontApi, Transport};
}
