//! Transports that actually move requests.
//!
//! Pages talk to the API through [`Transport`] so the same controllers run
//! against a live server (`HttpTransport`) or scripted replies
//! (`StubTransport`).

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use http::{Method, StatusCode};

use crate::{FetchError, RequestBuilder, Response};

/// Sends one request and returns whatever the server answered.
///
/// Implementations return non-2xx responses as `Ok`; `Err` means the request
/// could not complete at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError>;
}

/// reqwest-backed transport.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Default request timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Build a transport with the given timeout.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("shop-data/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FetchError::RequestError(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let url = reqwest::Url::parse(&request.url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", request.url, e)))?;

        let mut builder = self.client.request(request.method.clone(), url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let resp = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout
            } else {
                FetchError::RequestError(e.to_string())
            }
        })?;

        let status = resp.status();
        let headers: HashMap<String, String> = resp
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?
            .to_vec();

        Ok(Response::new(status, headers, body))
    }
}

/// A scripted reply for [`StubTransport`].
#[derive(Debug, Clone)]
pub enum StubReply {
    /// Answer with a response.
    Respond(Response),
    /// Fail as if the network were down.
    Fail(String),
}

/// In-memory transport with scripted replies, keyed by method and path.
///
/// Replies for a route are consumed in order; the last one repeats. Every
/// request is recorded. Unscripted routes answer 404.
#[derive(Default)]
pub struct StubTransport {
    routes: Mutex<HashMap<(Method, String), VecDeque<StubReply>>>,
    requests: Mutex<Vec<RequestBuilder>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply for `method path`.
    pub fn reply(&self, method: Method, path: &str, reply: StubReply) {
        if let Ok(mut routes) = self.routes.lock() {
            routes
                .entry((method, path.to_string()))
                .or_default()
                .push_back(reply);
        }
    }

    /// Queue a JSON response.
    pub fn json(self, method: Method, path: &str, status: u16, body: serde_json::Value) -> Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.reply(
            method,
            path,
            StubReply::Respond(Response::json_body(status, &body)),
        );
        self
    }

    /// Queue a raw-text response.
    pub fn text(self, method: Method, path: &str, status: u16, body: &str) -> Self {
        let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self.reply(
            method,
            path,
            StubReply::Respond(Response::new(status, HashMap::new(), body.as_bytes().to_vec())),
        );
        self
    }

    /// Queue a network failure.
    pub fn fail(self, method: Method, path: &str, reason: &str) -> Self {
        self.reply(method, path, StubReply::Fail(reason.to_string()));
        self
    }

    /// Requests seen so far.
    pub fn requests(&self) -> Vec<RequestBuilder> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }

    /// Requests seen for one method and path.
    pub fn requests_to(&self, method: &Method, path: &str) -> Vec<RequestBuilder> {
        self.requests()
            .into_iter()
            .filter(|r| r.method() == method && r.path() == path)
            .collect()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(&self, request: RequestBuilder) -> Result<Response, FetchError> {
        let key = (request.method().clone(), request.path().to_string());
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        let reply = self.routes.lock().ok().and_then(|mut routes| {
            let queue = routes.get_mut(&key)?;
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        });

        match reply {
            Some(StubReply::Respond(response)) => Ok(response),
            Some(StubReply::Fail(reason)) => Err(FetchError::RequestError(reason)),
            None => Ok(Response::json_body(
                StatusCode::NOT_FOUND,
                &serde_json::json!({"error": {"message": "Not found"}}),
            )),
        }
    }
}
