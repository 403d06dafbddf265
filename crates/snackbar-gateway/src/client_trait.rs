//! # ApiClient Trait
//!
//! Provides a common interface for resource-specific clients, adding default
//! `list`, `get`, `delete` and `exists` methods built on top of a generic
//! [`ResourceEndpoint`].
//!
//! Each client in the application crate implements this trait once and then
//! only writes the methods that are specific to its entity kind (custom
//! routes, composed reads, domain payloads).

use crate::endpoint::ResourceEndpoint;
use crate::error::GatewayError;
use crate::resource::ApiResource;
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the uniform read and
/// delete operations.
#[async_trait]
pub trait ApiClient<T: ApiResource>: Send + Sync {
    /// Access the inner generic endpoint.
    fn endpoint(&self) -> &ResourceEndpoint<T>;

    /// Fetch the full collection.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, GatewayError> {
        tracing::debug!("Sending request");
        self.endpoint().list().await
    }

    /// Fetch an entity by id; `Ok(None)` when the remote does not have it.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: &T::Id) -> Result<Option<T>, GatewayError> {
        tracing::debug!("Sending request");
        self.endpoint().get(id).await
    }

    /// Delete an entity by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: &T::Id) -> Result<(), GatewayError> {
        tracing::debug!("Sending request");
        self.endpoint().delete(id).await
    }

    /// Whether the entity exists remotely.
    #[tracing::instrument(skip(self))]
    async fn exists(&self, id: &T::Id) -> Result<bool, GatewayError> {
        self.endpoint().exists(id).await
    }
}
