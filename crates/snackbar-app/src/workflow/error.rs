//! Error types for the order workflow.

use crate::draft::DraftError;
use crate::model::{OrderId, ProductId};
use snackbar_gateway::GatewayError;
use thiserror::Error;

/// Errors that can occur while assembling, committing or promoting orders.
///
/// Absence and failure stay distinct all the way up: the `*NotFound`
/// variants mean the remote answered and genuinely does not have the
/// entity, while `Gateway` carries transport and status failures.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The requested order was not found.
    #[error("order not found: {0}")]
    OrderNotFound(OrderId),

    /// The requested product is not in the catalog.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// No customer record matches the authenticated principal.
    #[error("no customer for principal: {0}")]
    CustomerNotFound(String),

    /// The draft store is unavailable.
    #[error("draft store error: {0}")]
    Draft(#[from] DraftError),

    /// A remote call failed.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),
}
