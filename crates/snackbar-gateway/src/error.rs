//! # Gateway Errors
//!
//! This module defines the common error types used throughout the gateway.
//! By centralizing error definitions, we ensure consistent error handling across
//! all resource endpoints and clients.
//!
//! Lookups distinguish three outcomes: found (`Ok(Some)`), genuinely absent
//! (`Ok(None)`), and failed (`Err`). The variants here only ever describe the
//! third case, so a caller can never mistake a remote outage for an empty
//! collection.

use reqwest::StatusCode;

/// Errors that can occur while talking to the remote data API.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a usable response (connection refused,
    /// DNS failure, malformed base URL, body read failure).
    #[error("transport failure for {path}: {message}")]
    Transport { path: String, message: String },

    /// The remote answered with a status the operation does not accept.
    #[error("unexpected status {status} for {path}")]
    Status { status: StatusCode, path: String },

    /// A resource that the operation requires does not exist remotely.
    #[error("resource not found: {0}")]
    NotFound(String),

    /// The response body (or an outgoing entity) did not match the expected shape.
    #[error("invalid payload: {0}")]
    Payload(#[from] serde_json::Error),
}
