//! # Transport Layer
//!
//! This module defines the wire-level seam of the gateway: a request/response
//! pair and the [`Transport`] trait that executes them. Typed endpoints never
//! touch an HTTP client directly; they build an [`ApiRequest`] and hand it to
//! whichever transport the system was wired with.
//!
//! Two implementations exist:
//! - [`HttpTransport`] — the production transport, a thin wrapper over a
//!   [`reqwest::Client`] and the remote API's base URL.
//! - [`MockTransport`](crate::mock::MockTransport) — an in-memory transport
//!   for tests, driven by an expectation queue.

use crate::error::GatewayError;
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;

pub use reqwest::{Method, StatusCode};

/// One outbound call to the remote API, expressed independently of the
/// transport that will carry it.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the API base URL, e.g. `api/Products/3`.
    pub path: String,
    /// JSON body for POST/PUT requests.
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::POST, path).with_body(body)
    }

    pub fn put(path: impl Into<String>, body: Value) -> Self {
        Self::new(Method::PUT, path).with_body(body)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// The raw outcome of an executed request. Interpretation of the status code
/// is left to the endpoint layer; the transport only reports what the remote
/// said.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    /// Response body, `None` when the remote sent nothing.
    pub body: Option<String>,
}

/// Executes [`ApiRequest`]s against some backing channel.
///
/// An `Err` from [`Transport::execute`] always means the request itself
/// failed; a reachable remote that answers with an error status yields
/// `Ok` with that status in the [`ApiResponse`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, GatewayError>;
}

/// Production transport over HTTP.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base: Url,
}

impl HttpTransport {
    /// Creates a transport rooted at `base_url`. A missing trailing slash is
    /// tolerated; relative path joins require one.
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        let mut normalized = base_url.to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base = Url::parse(&normalized).map_err(|e| GatewayError::Transport {
            path: normalized.clone(),
            message: e.to_string(),
        })?;
        Ok(Self {
            client: Client::new(),
            base,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, GatewayError> {
        let url = self
            .base
            .join(&request.path)
            .map_err(|e| GatewayError::Transport {
                path: request.path.clone(),
                message: e.to_string(),
            })?;

        let mut builder = self.client.request(request.method.clone(), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| GatewayError::Transport {
            path: request.path.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| GatewayError::Transport {
            path: request.path.clone(),
            message: e.to_string(),
        })?;

        Ok(ApiResponse {
            status,
            body: if text.is_empty() { None } else { Some(text) },
        })
    }
}
