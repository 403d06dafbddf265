//! # Snackbar Ordering Demo
//!
//! Drives one complete pass through the system against the configured
//! remote API:
//!
//! 1. Fetch the product catalog.
//! 2. Build a draft for a session and commit it as an order.
//! 3. Promote the saved order to a transaction and record it.
//!
//! Run with `RUST_LOG=info cargo run` (or `debug` for full payloads); the
//! remote API's base URL comes from `SNACKBAR_API_URL`.

use snackbar_app::config::Config;
use snackbar_app::draft::SessionId;
use snackbar_app::lifecycle::SnackbarSystem;
use snackbar_gateway::tracing::setup_tracing;
use snackbar_gateway::ApiClient;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting snackbar ordering demo");

    let config = Config::load();
    let system = SnackbarSystem::new(&config).map_err(|e| e.to_string())?;
    let session = SessionId::new("demo");

    let span = tracing::info_span!("catalog_browse");
    let catalog = async {
        info!("Fetching product catalog");
        system.products.list().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(count = catalog.len(), "Catalog fetched");

    let Some(first) = catalog.first() else {
        info!("Catalog is empty, nothing to order");
        return system.shutdown().await;
    };

    let span = tracing::info_span!("order_building");
    let order = async {
        info!(product_id = %first.id, "Adding product to draft");
        system
            .workflow
            .add_product(&session, first.id)
            .await
            .map_err(|e| e.to_string())?;

        info!("Committing draft as a new order");
        system
            .workflow
            .save_new(&session, None)
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    info!(order_id = %order.id, cost = %order.cost, "Order saved");

    let span = tracing::info_span!("checkout");
    async {
        let transaction = system.workflow.promote_to_transaction(&order);
        info!(cost = %transaction.cost, discount = transaction.discount, "Transaction prepared");

        match system.workflow.save_transaction(order.id, transaction).await {
            Ok(()) => info!("Transaction recorded"),
            Err(e) => error!(error = %e, "Transaction could not be recorded"),
        }
    }
    .instrument(span)
    .await;

    system.shutdown().await?;

    info!("Demo completed");
    Ok(())
}
