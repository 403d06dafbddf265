//! # OrderProducts Client
//!
//! Client for the order↔product association rows. Rows are keyed by the
//! (order, product) pair rather than a surrogate id, so this client talks
//! to the gateway's raw JSON helpers instead of the uniform resource
//! surface.

use crate::model::{OrderId, OrderProduct, ProductId};
use snackbar_gateway::{to_json_array, Gateway, GatewayError};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct OrderProductsClient {
    gateway: Gateway,
}

impl OrderProductsClient {
    pub fn new(gateway: &Gateway) -> Self {
        Self {
            gateway: gateway.clone(),
        }
    }

    /// Every association row of one order. A null or empty body is an order
    /// without products, not an error.
    #[instrument(skip(self))]
    pub async fn rows_for_order(
        &self,
        order_id: OrderId,
    ) -> Result<Vec<OrderProduct>, GatewayError> {
        debug!("Sending request");
        let rows = self
            .gateway
            .fetch_json::<Vec<OrderProduct>>(format!("api/OrderProducts/{order_id}"))
            .await?;
        Ok(rows.unwrap_or_default())
    }

    /// Create rows in bulk.
    #[instrument(skip(self, rows))]
    pub async fn create_rows(&self, rows: &[OrderProduct]) -> Result<(), GatewayError> {
        debug!(count = rows.len(), "Sending request");
        self.gateway
            .post_json("api/OrderProducts/".to_string(), to_json_array(rows)?)
            .await
            .map(|_| ())
    }

    /// Replace every row of one order with the given set.
    #[instrument(skip(self, rows))]
    pub async fn replace_for_order(
        &self,
        order_id: OrderId,
        rows: &[OrderProduct],
    ) -> Result<(), GatewayError> {
        debug!(count = rows.len(), "Sending request");
        self.gateway
            .put_json(
                format!("api/OrderProducts/AllOrderProducts/{order_id}"),
                to_json_array(rows)?,
            )
            .await
    }

    /// Delete one row.
    #[instrument(skip(self))]
    pub async fn delete_row(
        &self,
        order_id: OrderId,
        product_id: ProductId,
    ) -> Result<(), GatewayError> {
        debug!("Sending request");
        self.gateway
            .delete_at(format!("api/OrderProducts/{order_id}/{product_id}"))
            .await
    }
}
