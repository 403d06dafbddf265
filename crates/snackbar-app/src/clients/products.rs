//! # Products Client
//!
//! Provides a high-level API for the product catalog. The catalog is plain
//! uniform CRUD; everything beyond create/update comes from the
//! [`ApiClient`] defaults.

use crate::model::{Product, ProductId};
use async_trait::async_trait;
use snackbar_gateway::{ApiClient, ApiResource, Gateway, GatewayError, ResourceEndpoint};
use tracing::{debug, instrument};

impl ApiResource for Product {
    type Id = ProductId;
    const COLLECTION: &'static str = "Products";
}

/// Client for the product catalog.
#[derive(Clone)]
pub struct ProductsClient {
    inner: ResourceEndpoint<Product>,
}

impl ProductsClient {
    pub fn new(gateway: &Gateway) -> Self {
        Self {
            inner: gateway.endpoint(),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_product(
        &self,
        product: &Product,
    ) -> Result<Option<Product>, GatewayError> {
        debug!("Sending request");
        self.inner.create(product).await
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        product: &Product,
    ) -> Result<Product, GatewayError> {
        debug!("Sending request");
        self.inner.update(&id, product).await
    }
}

#[async_trait]
impl ApiClient<Product> for ProductsClient {
    fn endpoint(&self) -> &ResourceEndpoint<Product> {
        &self.inner
    }
}
