//! # Transactions Client
//!
//! Provides a high-level API for checkout records.

use crate::model::{Transaction, TransactionId};
use async_trait::async_trait;
use snackbar_gateway::{ApiClient, ApiResource, Gateway, GatewayError, ResourceEndpoint};
use tracing::{debug, instrument};

impl ApiResource for Transaction {
    type Id = TransactionId;
    const COLLECTION: &'static str = "Transactions";
}

/// Client for transactions.
#[derive(Clone)]
pub struct TransactionsClient {
    inner: ResourceEndpoint<Transaction>,
}

impl TransactionsClient {
    pub fn new(gateway: &Gateway) -> Self {
        Self {
            inner: gateway.endpoint(),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_transaction(
        &self,
        transaction: &Transaction,
    ) -> Result<Option<Transaction>, GatewayError> {
        debug!("Sending request");
        self.inner.create(transaction).await
    }

    #[instrument(skip(self))]
    pub async fn update_transaction(
        &self,
        id: TransactionId,
        transaction: &Transaction,
    ) -> Result<Transaction, GatewayError> {
        debug!("Sending request");
        self.inner.update(&id, transaction).await
    }
}

#[async_trait]
impl ApiClient<Transaction> for TransactionsClient {
    fn endpoint(&self) -> &ResourceEndpoint<Transaction> {
        &self.inner
    }
}
