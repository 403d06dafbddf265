//! # Snackbar Gateway
//!
//! This crate provides the foundational building blocks for consuming the
//! snackbar's remote data API: a typed, uniform CRUD surface per entity kind
//! on top of a swappable wire transport.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Resource Layer** ([`ApiResource`]) — binds an entity type to its
//!    identifier and to the resource-oriented paths the remote exposes.
//! 2. **Transport Layer** ([`Transport`]) — executes [`ApiRequest`]s.
//!    [`HttpTransport`] is the production implementation; the [`mock`]
//!    module provides a deterministic in-memory one for tests.
//! 3. **Endpoint Layer** ([`Gateway`], [`ResourceEndpoint`]) — the generic
//!    CRUD logic, written once and instantiated per entity kind.
//!
//! Clients in the application crate wrap a [`ResourceEndpoint`] via the
//! [`ApiClient`] trait and add the routes specific to their entity.
//!
//! ## Lookup Contract
//!
//! Every lookup is three-way: `Ok(Some)` when the remote has the entity,
//! `Ok(None)` when it genuinely does not (404 or null body), `Err` when the
//! call failed. Callers can always tell an outage from an empty collection,
//! and existence checks built on `get` report true absence.
//!
//! ```rust
//! use snackbar_gateway::mock::MockTransport;
//! use snackbar_gateway::{ApiResource, Gateway, StatusCode};
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct Snack { id: u32, name: String }
//!
//! impl ApiResource for Snack {
//!     type Id = u32;
//!     const COLLECTION: &'static str = "Snacks";
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockTransport::new();
//!     mock.expect_get("api/Snacks/7").return_status(StatusCode::NOT_FOUND);
//!
//!     let gateway = Gateway::new(Arc::new(mock.clone()));
//!     let snacks = gateway.endpoint::<Snack>();
//!
//!     // 404 is absence, not an error.
//!     assert!(snacks.get(&7).await.unwrap().is_none());
//!     mock.verify();
//! }
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockTransport`](mock::MockTransport), an
//! expectation-queue transport that also records every executed request so
//! tests can assert call sequences and payloads. See the module docs for
//! the full API and usage patterns.

pub mod client_trait;
pub mod endpoint;
pub mod error;
pub mod mock;
pub mod resource;
pub mod tracing;
pub mod transport;

// Re-export core types for convenience
pub use client_trait::ApiClient;
pub use endpoint::{to_json_array, Gateway, ResourceEndpoint};
pub use error::GatewayError;
pub use resource::ApiResource;
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, StatusCode, Transport};
