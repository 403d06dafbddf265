//! # Mock Transport & Testing Guide
//!
//! [`MockTransport`] implements the same [`Transport`] API as the production
//! HTTP transport but operates entirely in-memory. Tests queue expectations
//! (method, path, canned response) and the mock serves them in order,
//! panicking on any request it was not told to expect — so a test asserts
//! both the results *and* the exact call sequence an operation performs.
//!
//! ## When to use the mock vs a live remote
//!
//! | Feature | MockTransport | Live API |
//! |---------|---------------|----------|
//! | Determinism | 100% deterministic | Subject to remote state |
//! | Error injection | Easy (`return_error`, `return_status`) | Hard |
//! | Call-sequence assertions | Built in (`requests()`) | Unavailable |
//! | Use case | Endpoint/client/workflow tests | Manual runs |
//!
//! ## Usage
//!
//! ```rust
//! use snackbar_gateway::mock::MockTransport;
//! use snackbar_gateway::{ApiRequest, StatusCode, Transport};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect_get("api/Products/1")
//!         .return_json(StatusCode::OK, json!({"Id": 1, "Name": "Cola"}));
//!
//!     let response = mock.execute(ApiRequest::get("api/Products/1")).await.unwrap();
//!     assert_eq!(response.status, StatusCode::OK);
//!
//!     mock.verify();
//! }
//! ```
//!
//! Simulating a downstream outage is one line:
//! `mock.expect_get("api/Products/1").return_error("connection refused")`.

use crate::error::GatewayError;
use crate::transport::{ApiRequest, ApiResponse, Method, StatusCode, Transport};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// One expected request and the response the mock will serve for it.
struct Expectation {
    method: Method,
    path: String,
    response: Result<ApiResponse, GatewayError>,
}

/// An in-memory transport with expectation tracking.
///
/// Cloning is cheap and all clones share the same queue, so the same handle
/// can be wired into the system under test and kept around for `verify()`.
#[derive(Clone, Default)]
pub struct MockTransport {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a request with the given method and path.
    pub fn expect(&self, method: Method, path: impl Into<String>) -> ExpectationBuilder {
        ExpectationBuilder {
            method,
            path: path.into(),
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_get(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::GET, path)
    }

    pub fn expect_post(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::POST, path)
    }

    pub fn expect_put(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::PUT, path)
    }

    pub fn expect_delete(&self, path: impl Into<String>) -> ExpectationBuilder {
        self.expect(Method::DELETE, path)
    }

    /// Every request executed so far, in order. Useful for asserting bodies
    /// and call counts after the fact.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap();
        if !remaining.is_empty() {
            panic!(
                "not all expectations were met, {} remaining",
                remaining.len()
            );
        }
    }
}

/// Fluent builder finishing an expectation with its canned response.
pub struct ExpectationBuilder {
    method: Method,
    path: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ExpectationBuilder {
    /// Respond with a status and a JSON body.
    pub fn return_json(self, status: StatusCode, body: Value) {
        let response = ApiResponse {
            status,
            body: Some(body.to_string()),
        };
        self.push(Ok(response));
    }

    /// Respond with a bare status and no body.
    pub fn return_status(self, status: StatusCode) {
        self.push(Ok(ApiResponse { status, body: None }));
    }

    /// Fail the request at the transport level, as an unreachable remote would.
    pub fn return_error(self, message: impl Into<String>) {
        let error = GatewayError::Transport {
            path: self.path.clone(),
            message: message.into(),
        };
        self.push(Err(error));
    }

    fn push(self, response: Result<ApiResponse, GatewayError>) {
        self.expectations.lock().unwrap().push_back(Expectation {
            method: self.method,
            path: self.path,
            response,
        });
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());

        let expectation = self.expectations.lock().unwrap().pop_front();
        let Some(expectation) = expectation else {
            panic!(
                "unexpected request: {} {}",
                request.method, request.path
            );
        };
        if expectation.method != request.method || expectation.path != request.path {
            panic!(
                "request mismatch: expected {} {}, got {} {}",
                expectation.method, expectation.path, request.method, request.path
            );
        }
        expectation.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn serves_expectations_in_order() {
        let mock = MockTransport::new();
        mock.expect_get("api/Products/1")
            .return_json(StatusCode::OK, json!({"Id": 1}));
        mock.expect_delete("api/Products/1")
            .return_status(StatusCode::NO_CONTENT);

        let first = mock.execute(ApiRequest::get("api/Products/1")).await.unwrap();
        assert_eq!(first.status, StatusCode::OK);
        assert!(first.body.is_some());

        let second = mock
            .execute(ApiRequest::delete("api/Products/1"))
            .await
            .unwrap();
        assert_eq!(second.status, StatusCode::NO_CONTENT);
        assert!(second.body.is_none());

        mock.verify();
    }

    #[tokio::test]
    async fn injected_errors_surface_as_transport_failures() {
        let mock = MockTransport::new();
        mock.expect_get("api/Products/1")
            .return_error("connection refused");

        let result = mock.execute(ApiRequest::get("api/Products/1")).await;
        assert!(matches!(
            result,
            Err(GatewayError::Transport { ref message, .. }) if message == "connection refused"
        ));
    }

    #[tokio::test]
    async fn records_executed_requests() {
        let mock = MockTransport::new();
        mock.expect_post("api/Orders/").return_status(StatusCode::CREATED);

        let body = json!({"Id": 0});
        mock.execute(ApiRequest::post("api/Orders/", body.clone()))
            .await
            .unwrap();

        let log = mock.requests();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].method, Method::POST);
        assert_eq!(log[0].body, Some(body));
    }

    #[tokio::test]
    #[should_panic(expected = "not all expectations were met")]
    async fn verify_panics_on_unmet_expectations() {
        let mock = MockTransport::new();
        mock.expect_get("api/Products/1")
            .return_status(StatusCode::OK);
        mock.verify();
    }
}
