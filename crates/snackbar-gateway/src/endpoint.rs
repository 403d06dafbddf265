//! # Generic Resource Endpoint
//!
//! This module defines [`Gateway`], the shared handle over a [`Transport`],
//! and [`ResourceEndpoint`], the typed CRUD surface for one entity kind.
//!
//! # Architecture Note
//! The endpoint is written *once* against the [`ApiResource`] contract and
//! reused for every entity kind. Clients in the application crate wrap an
//! endpoint and add the routes that fall outside the uniform shape.
//!
//! ## Lookup contract
//! Every read distinguishes three outcomes:
//! - `Ok(Some(entity))` — the remote has it;
//! - `Ok(None)` — the remote answered 404, or answered success with an
//!   empty/null body;
//! - `Err(_)` — the call failed in transit or came back with a status the
//!   operation does not accept.
//!
//! Writes never swallow failures: `update` propagates a failed PUT (and a
//! failed follow-up read) instead of echoing the stale input, and `delete`
//! inspects its response.

use crate::error::GatewayError;
use crate::resource::ApiResource;
use crate::transport::{ApiRequest, ApiResponse, StatusCode, Transport};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, warn};

/// Shared, cheaply cloneable handle over the transport.
///
/// Typed endpoints are created through [`Gateway::endpoint`]; the raw JSON
/// helpers are for client methods whose routes do not fit the uniform
/// collection/item shape (e.g. `api/Customers/Authentication/{id}`).
#[derive(Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
}

impl Gateway {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Creates the typed endpoint for an entity kind.
    pub fn endpoint<T: ApiResource>(&self) -> ResourceEndpoint<T> {
        ResourceEndpoint {
            gateway: self.clone(),
            _resource: PhantomData,
        }
    }

    /// GET `path` and deserialize the body.
    ///
    /// Returns `Ok(None)` on 404 or on a success response without a usable
    /// body — the explicit absence signal shared by all lookups.
    pub async fn fetch_json<R: DeserializeOwned>(
        &self,
        path: String,
    ) -> Result<Option<R>, GatewayError> {
        let response = self.transport.execute(ApiRequest::get(path.clone())).await?;
        if response.status == StatusCode::NOT_FOUND {
            debug!(%path, "remote reports absent");
            return Ok(None);
        }
        Self::ensure_success(&response, &path)?;
        match response.body {
            None => Ok(None),
            Some(text) => Ok(serde_json::from_str::<Option<R>>(&text)?),
        }
    }

    /// POST `body` to `path`, returning the response body on success.
    pub async fn post_json(
        &self,
        path: String,
        body: serde_json::Value,
    ) -> Result<Option<String>, GatewayError> {
        let response = self
            .transport
            .execute(ApiRequest::post(path.clone(), body))
            .await?;
        Self::ensure_success(&response, &path)?;
        Ok(response.body)
    }

    /// PUT `body` to `path`.
    pub async fn put_json(&self, path: String, body: serde_json::Value) -> Result<(), GatewayError> {
        let response = self
            .transport
            .execute(ApiRequest::put(path.clone(), body))
            .await?;
        Self::ensure_success(&response, &path)
    }

    /// DELETE `path`.
    pub async fn delete_at(&self, path: String) -> Result<(), GatewayError> {
        let response = self
            .transport
            .execute(ApiRequest::delete(path.clone()))
            .await?;
        Self::ensure_success(&response, &path)
    }

    fn ensure_success(response: &ApiResponse, path: &str) -> Result<(), GatewayError> {
        if response.status == StatusCode::NOT_FOUND {
            warn!(%path, "not found");
            return Err(GatewayError::NotFound(path.to_string()));
        }
        if !response.status.is_success() {
            warn!(%path, status = %response.status, "unexpected status");
            return Err(GatewayError::Status {
                status: response.status,
                path: path.to_string(),
            });
        }
        Ok(())
    }
}

/// Typed CRUD surface for one entity kind.
#[derive(Clone)]
pub struct ResourceEndpoint<T: ApiResource> {
    gateway: Gateway,
    _resource: PhantomData<T>,
}

impl<T: ApiResource> ResourceEndpoint<T> {
    /// Access the underlying gateway, for custom-path calls.
    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Fetch the full collection. A success response with a null or empty
    /// body is an empty collection, not an error.
    pub async fn list(&self) -> Result<Vec<T>, GatewayError> {
        debug!(collection = T::COLLECTION, "List");
        let items = self
            .gateway
            .fetch_json::<Vec<T>>(T::collection_path())
            .await?;
        Ok(items.unwrap_or_default())
    }

    /// Fetch one entity by id; `Ok(None)` when the remote does not have it.
    pub async fn get(&self, id: &T::Id) -> Result<Option<T>, GatewayError> {
        debug!(collection = T::COLLECTION, %id, "Get");
        self.gateway.fetch_json(T::read_path(id)).await
    }

    /// Create an entity. Returns the created entity when the remote echoes
    /// it back (resource-oriented APIs usually do, carrying the assigned id),
    /// `None` when the response had no body.
    pub async fn create(&self, item: &T) -> Result<Option<T>, GatewayError> {
        debug!(collection = T::COLLECTION, "Create");
        let body = serde_json::to_value(item)?;
        let echoed = self.gateway.post_json(T::collection_path(), body).await?;
        match echoed {
            None => Ok(None),
            Some(text) => Ok(serde_json::from_str::<Option<T>>(&text)?),
        }
    }

    /// Update an entity, then re-read the server's canonical version.
    ///
    /// Failure of either step is propagated; the caller never receives its
    /// own input back disguised as a result.
    pub async fn update(&self, id: &T::Id, item: &T) -> Result<T, GatewayError> {
        debug!(collection = T::COLLECTION, %id, "Update");
        let body = serde_json::to_value(item)?;
        self.gateway.put_json(T::item_path(id), body).await?;
        self.get(id)
            .await?
            .ok_or_else(|| GatewayError::NotFound(T::read_path(id)))
    }

    /// Delete an entity by id.
    pub async fn delete(&self, id: &T::Id) -> Result<(), GatewayError> {
        debug!(collection = T::COLLECTION, %id, "Delete");
        self.gateway.delete_at(T::item_path(id)).await
    }

    /// Whether the entity exists remotely. Sound because [`Self::get`]
    /// reports true absence.
    pub async fn exists(&self, id: &T::Id) -> Result<bool, GatewayError> {
        Ok(self.get(id).await?.is_some())
    }
}

/// Serialize a slice of entities for bulk routes.
pub fn to_json_array<T: Serialize>(items: &[T]) -> Result<serde_json::Value, GatewayError> {
    Ok(serde_json::to_value(items)?)
}
