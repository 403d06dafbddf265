//! Request messages carried from [`DraftClient`](super::DraftClient) to the
//! [`DraftActor`](super::DraftActor).
//!
//! Every variant carries a oneshot responder. Store operations themselves
//! cannot fail — an absent session behaves as an empty draft — so the
//! responders carry plain values; channel failures surface client-side as
//! [`DraftError`](super::DraftError).

use super::{OrderDraft, SessionId};
use crate::model::{OrderId, Product, ProductId};
use tokio::sync::oneshot;

#[derive(Debug)]
pub enum DraftRequest {
    /// Replace the session's draft wholesale. A `target` records the order
    /// an edit session works on.
    Replace {
        session: SessionId,
        target: Option<OrderId>,
        products: Vec<Product>,
        respond_to: oneshot::Sender<()>,
    },
    /// Append a product, materializing the draft when the session had none.
    /// Responds with the draft's new size.
    Add {
        session: SessionId,
        product: Product,
        respond_to: oneshot::Sender<usize>,
    },
    /// Remove the first entry matching the product id. Responds with
    /// whether anything was removed.
    Remove {
        session: SessionId,
        product_id: ProductId,
        respond_to: oneshot::Sender<bool>,
    },
    /// Clone the session's current draft (empty when the session has none).
    Snapshot {
        session: SessionId,
        respond_to: oneshot::Sender<OrderDraft>,
    },
    /// Discard the session's draft unconditionally.
    Clear {
        session: SessionId,
        respond_to: oneshot::Sender<()>,
    },
}
