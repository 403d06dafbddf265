//! # Customers Client
//!
//! Provides a high-level API for customer records. Besides the uniform
//! operations, customers can be looked up and deleted by their external
//! authentication id — the link between a logged-in principal and its
//! record.

use crate::model::{Customer, CustomerId};
use async_trait::async_trait;
use snackbar_gateway::{ApiClient, ApiResource, Gateway, GatewayError, ResourceEndpoint};
use tracing::{debug, instrument};

impl ApiResource for Customer {
    type Id = CustomerId;
    const COLLECTION: &'static str = "Customers";
}

/// Client for customer records.
#[derive(Clone)]
pub struct CustomersClient {
    inner: ResourceEndpoint<Customer>,
}

impl CustomersClient {
    pub fn new(gateway: &Gateway) -> Self {
        Self {
            inner: gateway.endpoint(),
        }
    }

    /// The customer record of an authenticated principal; `Ok(None)` when
    /// the principal has not registered yet.
    #[instrument(skip(self))]
    pub async fn by_authentication(
        &self,
        authentication_id: &str,
    ) -> Result<Option<Customer>, GatewayError> {
        debug!("Sending request");
        self.inner
            .gateway()
            .fetch_json(format!("api/Customers/Authentication/{authentication_id}"))
            .await
    }

    #[instrument(skip(self))]
    pub async fn create_customer(
        &self,
        customer: &Customer,
    ) -> Result<Option<Customer>, GatewayError> {
        debug!("Sending request");
        self.inner.create(customer).await
    }

    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        customer: &Customer,
    ) -> Result<Customer, GatewayError> {
        debug!("Sending request");
        self.inner.update(&id, customer).await
    }

    /// Remove the record tied to an external authentication id.
    #[instrument(skip(self))]
    pub async fn delete_by_authentication(
        &self,
        authentication_id: &str,
    ) -> Result<(), GatewayError> {
        debug!("Sending request");
        self.inner
            .gateway()
            .delete_at(format!("api/Customers/Authentication/{authentication_id}"))
            .await
    }
}

#[async_trait]
impl ApiClient<Customer> for CustomersClient {
    fn endpoint(&self) -> &ResourceEndpoint<Customer> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use snackbar_gateway::mock::MockTransport;
    use snackbar_gateway::StatusCode;
    use std::sync::Arc;

    #[tokio::test]
    async fn authentication_lookup_distinguishes_absence() {
        let mock = MockTransport::new();
        let gateway = Gateway::new(Arc::new(mock.clone()));
        let client = CustomersClient::new(&gateway);

        mock.expect_get("api/Customers/Authentication/auth-1").return_json(
            StatusCode::OK,
            json!({"Id": 4, "AuthenticationId": "auth-1", "FirstName": "Alice"}),
        );
        mock.expect_get("api/Customers/Authentication/auth-2")
            .return_status(StatusCode::NOT_FOUND);

        let known = client.by_authentication("auth-1").await.unwrap();
        assert_eq!(known.map(|c| c.id), Some(CustomerId(4)));

        // An unregistered principal is absence, not a blank customer.
        let unknown = client.by_authentication("auth-2").await.unwrap();
        assert!(unknown.is_none());
        mock.verify();
    }
}
