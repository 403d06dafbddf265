use crate::clients::{
    CustomersClient, OrderProductsClient, OrdersClient, OwnersClient, ProductsClient,
    TransactionsClient,
};
use crate::config::Config;
use crate::draft::{self, DraftClient};
use crate::workflow::OrderWorkflow;
use snackbar_gateway::{Gateway, GatewayError, HttpTransport, Transport};
use std::sync::Arc;
use tracing::{error, info};

/// The main runtime orchestrator for the snackbar application.
///
/// `SnackbarSystem` is responsible for:
/// - **Lifecycle Management**: starting the draft actor and shutting it down
/// - **Dependency Wiring**: sharing one transport across every client and
///   handing the workflow the clients it composes
///
/// # Example
///
/// ```ignore
/// let system = SnackbarSystem::new(&Config::load())?;
///
/// let session = SessionId::new("session-1");
/// system.workflow.add_product(&session, ProductId(1)).await?;
/// let order = system.workflow.save_new(&session, None).await?;
///
/// system.shutdown().await?;
/// ```
pub struct SnackbarSystem {
    /// The order workflow composing drafts with the gateway clients.
    pub workflow: OrderWorkflow,

    /// Clients for direct entity access (catalog management, owner admin).
    pub products: ProductsClient,
    pub orders: OrdersClient,
    pub order_products: OrderProductsClient,
    pub customers: CustomersClient,
    pub transactions: TransactionsClient,
    pub owners: OwnersClient,

    /// Handle for raw draft-store access.
    pub drafts: DraftClient,

    /// Task handle of the draft actor (used for graceful shutdown).
    handle: tokio::task::JoinHandle<()>,
}

impl SnackbarSystem {
    /// Creates a system talking HTTP to the configured remote API.
    pub fn new(config: &Config) -> Result<Self, GatewayError> {
        let transport = HttpTransport::new(&config.api_base_url)?;
        Ok(Self::with_transport(Arc::new(transport), config.draft_buffer))
    }

    /// Wires the system over an arbitrary transport. Tests pass a
    /// [`MockTransport`](snackbar_gateway::mock::MockTransport) here and get
    /// the full system without a live remote.
    pub fn with_transport(transport: Arc<dyn Transport>, draft_buffer: usize) -> Self {
        let gateway = Gateway::new(transport);

        let products = ProductsClient::new(&gateway);
        let orders = OrdersClient::new(&gateway);
        let order_products = OrderProductsClient::new(&gateway);
        let customers = CustomersClient::new(&gateway);
        let transactions = TransactionsClient::new(&gateway);
        let owners = OwnersClient::new(&gateway);

        let (draft_actor, drafts) = draft::new(draft_buffer);
        let handle = tokio::spawn(draft_actor.run());

        let workflow = OrderWorkflow::new(
            drafts.clone(),
            products.clone(),
            orders.clone(),
            order_products.clone(),
            customers.clone(),
            transactions.clone(),
        );

        Self {
            workflow,
            products,
            orders,
            order_products,
            customers,
            transactions,
            owners,
            drafts,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the workflow and the draft handle closes the draft actor's
    /// channel; the actor drains its queue and exits, and any panic in its
    /// task is reported as an error.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.workflow);
        drop(self.drafts);

        if let Err(e) = self.handle.await {
            error!("Draft actor task failed: {:?}", e);
            return Err(format!("Draft actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
