//! # Orders Client
//!
//! Provides a high-level API for orders. Single orders are read from the
//! remote's `SpecificOrder` route; detail reads additionally materialize
//! the product lines from the association rows — one product fetch per
//! *distinct* product id, with the quantity kept on the line.

use super::order_products::OrderProductsClient;
use crate::model::{CustomerId, Order, OrderDetail, OrderId, OrderLine, Product};
use async_trait::async_trait;
use snackbar_gateway::{ApiClient, ApiResource, Gateway, GatewayError, ResourceEndpoint};
use tracing::{debug, instrument};

impl ApiResource for Order {
    type Id = OrderId;
    const COLLECTION: &'static str = "Orders";

    // Single orders are served under a dedicated route.
    fn read_path(id: &OrderId) -> String {
        format!("api/Orders/SpecificOrder/{id}")
    }
}

/// Client for customer orders.
#[derive(Clone)]
pub struct OrdersClient {
    inner: ResourceEndpoint<Order>,
    products: ResourceEndpoint<Product>,
    order_products: OrderProductsClient,
}

impl OrdersClient {
    pub fn new(gateway: &Gateway) -> Self {
        Self {
            inner: gateway.endpoint(),
            products: gateway.endpoint(),
            order_products: OrderProductsClient::new(gateway),
        }
    }

    /// Orders placed by one customer.
    #[instrument(skip(self))]
    pub async fn for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Order>, GatewayError> {
        debug!("Sending request");
        let orders = self
            .inner
            .gateway()
            .fetch_json::<Vec<Order>>(format!("api/Orders/CustomerOrders/{customer_id}"))
            .await?;
        Ok(orders.unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, order: &Order) -> Result<Option<Order>, GatewayError> {
        debug!("Sending request");
        self.inner.create(order).await
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, order: &Order) -> Result<Order, GatewayError> {
        debug!("Sending request");
        self.inner.update(&id, order).await
    }

    /// An order with its product lines materialized.
    ///
    /// One fetch for the association rows, then one product fetch per
    /// distinct product id. A row referencing a product the catalog no
    /// longer has is an error, not a silently dropped line.
    #[instrument(skip(self))]
    pub async fn get_detailed(&self, id: OrderId) -> Result<Option<OrderDetail>, GatewayError> {
        let Some(order) = self.inner.get(&id).await? else {
            return Ok(None);
        };

        let rows = self.order_products.rows_for_order(id).await?;
        let mut lines = Vec::with_capacity(rows.len());
        for row in rows {
            let product = self
                .products
                .get(&row.product_id)
                .await?
                .ok_or_else(|| GatewayError::NotFound(Product::item_path(&row.product_id)))?;
            lines.push(OrderLine {
                product,
                quantity: row.amount,
            });
        }

        Ok(Some(OrderDetail { order, lines }))
    }
}

#[async_trait]
impl ApiClient<Order> for OrdersClient {
    fn endpoint(&self) -> &ResourceEndpoint<Order> {
        &self.inner
    }
}
