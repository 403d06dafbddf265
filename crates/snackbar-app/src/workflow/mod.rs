//! # Order Workflow
//!
//! The orchestration layer: every multi-step user flow that composes the
//! per-session draft store with the remote data gateway lives here.
//!
//! ## The build-then-commit cycle
//!
//! A session assembles an order across several independent requests —
//! add product, remove product — and commits it in one step:
//!
//! 1. `add_product` / `remove_product` mutate the session's draft after
//!    validating the product against the catalog.
//! 2. `save_new` turns the draft into an order (cost = sum of the product
//!    prices) and clears it; `begin_edit`/`save_edit` do the same against
//!    an existing order, carrying over its status, favorite flag and owner.
//! 3. `promote_to_transaction` derives the checkout record from the saved
//!    order; `save_transaction` persists it after the user confirms.
//!
//! Because saving clears the session's draft, the saved order returned by
//! `save_new`/`save_edit` keeps its product list attached — promotion works
//! on that value instead of reaching back into shared state.

pub mod error;

pub use error::WorkflowError;

use crate::clients::{
    CustomersClient, OrderProductsClient, OrdersClient, ProductsClient, TransactionsClient,
};
use crate::draft::{DraftClient, OrderDraft, SessionId};
use crate::model::{
    CreateOrderView, Order, OrderDetailView, OrderId, OrderProduct, OrdersOverview, ProductId,
    Transaction, TransactionId,
};
use chrono::Utc;
use snackbar_gateway::ApiClient;
use tracing::{debug, info, instrument};

/// Coordinates drafts, catalog lookups and order persistence.
#[derive(Clone)]
pub struct OrderWorkflow {
    drafts: DraftClient,
    products: ProductsClient,
    orders: OrdersClient,
    order_products: OrderProductsClient,
    customers: CustomersClient,
    transactions: TransactionsClient,
}

impl OrderWorkflow {
    pub fn new(
        drafts: DraftClient,
        products: ProductsClient,
        orders: OrdersClient,
        order_products: OrderProductsClient,
        customers: CustomersClient,
        transactions: TransactionsClient,
    ) -> Self {
        Self {
            drafts,
            products,
            orders,
            order_products,
            customers,
            transactions,
        }
    }

    /// Start an edit session: the draft is replaced wholesale with the
    /// order's current products (quantity expanded into repetition) and the
    /// target order id is recorded.
    #[instrument(skip(self))]
    pub async fn begin_edit(
        &self,
        session: &SessionId,
        order_id: OrderId,
    ) -> Result<(), WorkflowError> {
        debug!("begin_edit called");
        let detail = self
            .orders
            .get_detailed(order_id)
            .await?
            .ok_or(WorkflowError::OrderNotFound(order_id))?;

        let products = detail.expanded_products();
        self.drafts
            .replace(session, Some(order_id), products)
            .await?;
        info!(%session, %order_id, "Edit session started");
        Ok(())
    }

    /// Append a catalog product to the session's draft. Valid whether the
    /// draft builds a new order or edits an existing one.
    #[instrument(skip(self))]
    pub async fn add_product(
        &self,
        session: &SessionId,
        product_id: ProductId,
    ) -> Result<(), WorkflowError> {
        let product = self
            .products
            .get(&product_id)
            .await?
            .ok_or(WorkflowError::ProductNotFound(product_id))?;
        self.drafts.add(session, product).await?;
        Ok(())
    }

    /// Remove the first matching entry from the session's draft. The product
    /// must exist in the catalog; a product that is simply not in the draft
    /// is a no-op.
    #[instrument(skip(self))]
    pub async fn remove_product(
        &self,
        session: &SessionId,
        product_id: ProductId,
    ) -> Result<(), WorkflowError> {
        let product = self
            .products
            .get(&product_id)
            .await?
            .ok_or(WorkflowError::ProductNotFound(product_id))?;
        let _ = self.drafts.remove(session, product.id).await?;
        Ok(())
    }

    /// Commit the session's draft as a new order.
    ///
    /// When a principal is given, the order is attached to the customer its
    /// external id resolves to. The draft is cleared afterwards; the
    /// returned order carries the committed product list.
    #[instrument(skip(self))]
    pub async fn save_new(
        &self,
        session: &SessionId,
        principal: Option<&str>,
    ) -> Result<Order, WorkflowError> {
        debug!("save_new called");
        let draft = self.drafts.snapshot(session).await?;

        let customer = match principal {
            Some(authentication_id) => Some(
                self.customers
                    .by_authentication(authentication_id)
                    .await?
                    .ok_or_else(|| {
                        WorkflowError::CustomerNotFound(authentication_id.to_string())
                    })?,
            ),
            None => None,
        };

        let order = Order {
            id: OrderId(0),
            cost: draft.cost(),
            date_of_order: Utc::now(),
            is_favorited: false,
            status: Order::INITIAL_STATUS.to_string(),
            customer_id: customer.map(|c| c.id),
            products: draft.products,
        };

        let echoed = self.orders.create_order(&order).await?;
        // The echo, when present, carries the assigned id but usually not
        // the product list; keep the committed products attached either way.
        let saved = match echoed {
            Some(mut created) => {
                if created.products.is_empty() {
                    created.products = order.products.clone();
                }
                created
            }
            None => order,
        };

        self.drafts.clear(session).await?;
        info!(%session, order_id = %saved.id, cost = %saved.cost, "Order saved");
        Ok(saved)
    }

    /// Commit the session's draft into an existing order.
    ///
    /// Status, favorite flag and owning customer are carried over from the
    /// prior version; cost is recomputed from the draft and the association
    /// rows are replaced to match it.
    #[instrument(skip(self))]
    pub async fn save_edit(
        &self,
        session: &SessionId,
        order_id: OrderId,
    ) -> Result<Order, WorkflowError> {
        debug!("save_edit called");
        let prior = self
            .orders
            .get(&order_id)
            .await?
            .ok_or(WorkflowError::OrderNotFound(order_id))?;
        let draft = self.drafts.snapshot(session).await?;

        let edited = Order {
            id: order_id,
            cost: draft.cost(),
            date_of_order: Utc::now(),
            is_favorited: prior.is_favorited,
            status: prior.status,
            customer_id: prior.customer_id,
            products: draft.products,
        };
        let rows = OrderProduct::aggregate(order_id, &edited.products);

        let mut updated = self.orders.update_order(order_id, &edited).await?;
        self.order_products
            .replace_for_order(order_id, &rows)
            .await?;
        if updated.products.is_empty() {
            updated.products = edited.products.clone();
        }

        self.drafts.clear(session).await?;
        info!(%session, %order_id, cost = %updated.cost, "Order updated");
        Ok(updated)
    }

    /// Discard the session's draft, whatever state it was in.
    #[instrument(skip(self))]
    pub async fn cancel(&self, session: &SessionId) -> Result<(), WorkflowError> {
        self.drafts.clear(session).await?;
        Ok(())
    }

    /// The session's current draft.
    pub async fn current_draft(&self, session: &SessionId) -> Result<OrderDraft, WorkflowError> {
        Ok(self.drafts.snapshot(session).await?)
    }

    /// Derive the checkout record for a saved order. Nothing is persisted
    /// until [`Self::save_transaction`]; the timestamp is the promotion
    /// instant, not the order's creation instant.
    pub fn promote_to_transaction(&self, order: &Order) -> Transaction {
        let discount = order.products.iter().map(|p| p.discount).sum();
        Transaction {
            id: TransactionId(0),
            cost: order.cost,
            discount,
            date_of_transaction: Utc::now(),
            customer_id: order.customer_id,
            order_id: order.id,
        }
    }

    /// Persist a confirmed transaction against its order.
    #[instrument(skip(self, transaction))]
    pub async fn save_transaction(
        &self,
        order_id: OrderId,
        mut transaction: Transaction,
    ) -> Result<(), WorkflowError> {
        let order = self
            .orders
            .get(&order_id)
            .await?
            .ok_or(WorkflowError::OrderNotFound(order_id))?;

        transaction.order_id = order.id;
        transaction.date_of_transaction = Utc::now();
        self.transactions.create_transaction(&transaction).await?;
        info!(%order_id, cost = %transaction.cost, "Transaction recorded");
        Ok(())
    }

    /// The order-building page: the session's draft plus the catalog.
    #[instrument(skip(self))]
    pub async fn create_order_view(
        &self,
        session: &SessionId,
    ) -> Result<CreateOrderView, WorkflowError> {
        let draft = self.drafts.snapshot(session).await?;
        let catalog = self.products.list().await?;
        Ok(CreateOrderView { draft, catalog })
    }

    /// The orders page of an authenticated principal: their orders and the
    /// favorited subset.
    #[instrument(skip(self))]
    pub async fn orders_overview(&self, principal: &str) -> Result<OrdersOverview, WorkflowError> {
        let customer = self
            .customers
            .by_authentication(principal)
            .await?
            .ok_or_else(|| WorkflowError::CustomerNotFound(principal.to_string()))?;

        let orders = self.orders.for_customer(customer.id).await?;
        let favorites = orders.iter().filter(|o| o.is_favorited).cloned().collect();
        Ok(OrdersOverview {
            orders,
            favorites,
            customer,
        })
    }

    /// The order detail page: the order, its customer when resolvable, and
    /// its product lines.
    #[instrument(skip(self))]
    pub async fn order_details(
        &self,
        order_id: OrderId,
    ) -> Result<OrderDetailView, WorkflowError> {
        let detail = self
            .orders
            .get_detailed(order_id)
            .await?
            .ok_or(WorkflowError::OrderNotFound(order_id))?;

        let customer = match detail.order.customer_id {
            Some(id) => self.customers.get(&id).await?,
            None => None,
        };

        Ok(OrderDetailView {
            order: detail.order,
            customer,
            lines: detail.lines,
        })
    }
}
