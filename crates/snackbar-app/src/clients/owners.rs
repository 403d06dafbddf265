//! # Owners Client
//!
//! Provides a high-level API for owner accounts.

use crate::model::{Owner, OwnerId};
use async_trait::async_trait;
use snackbar_gateway::{ApiClient, ApiResource, Gateway, GatewayError, ResourceEndpoint};
use tracing::{debug, instrument};

impl ApiResource for Owner {
    type Id = OwnerId;
    const COLLECTION: &'static str = "Owners";
}

/// Client for owner accounts.
#[derive(Clone)]
pub struct OwnersClient {
    inner: ResourceEndpoint<Owner>,
}

impl OwnersClient {
    pub fn new(gateway: &Gateway) -> Self {
        Self {
            inner: gateway.endpoint(),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_owner(&self, owner: &Owner) -> Result<Option<Owner>, GatewayError> {
        debug!("Sending request");
        self.inner.create(owner).await
    }

    #[instrument(skip(self))]
    pub async fn update_owner(&self, id: OwnerId, owner: &Owner) -> Result<Owner, GatewayError> {
        debug!("Sending request");
        self.inner.update(&id, owner).await
    }
}

#[async_trait]
impl ApiClient<Owner> for OwnersClient {
    fn endpoint(&self) -> &ResourceEndpoint<Owner> {
        &self.inner
    }
}
