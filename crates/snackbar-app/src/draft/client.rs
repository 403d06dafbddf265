//! # Draft Client
//!
//! The interface half of the draft store: a cheaply cloneable handle that
//! forwards requests over the channel and awaits the oneshot reply.

use super::error::DraftError;
use super::message::DraftRequest;
use super::{OrderDraft, SessionId};
use crate::model::{OrderId, Product, ProductId};
use tokio::sync::{mpsc, oneshot};

/// Client for the draft store. Holds only a sender, so cloning is cheap and
/// every clone talks to the same actor.
#[derive(Clone)]
pub struct DraftClient {
    sender: mpsc::Sender<DraftRequest>,
}

impl DraftClient {
    pub(super) fn new(sender: mpsc::Sender<DraftRequest>) -> Self {
        Self { sender }
    }

    /// Replace the session's draft wholesale; `target` marks an edit session.
    pub async fn replace(
        &self,
        session: &SessionId,
        target: Option<OrderId>,
        products: Vec<Product>,
    ) -> Result<(), DraftError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DraftRequest::Replace {
                session: session.clone(),
                target,
                products,
                respond_to,
            })
            .await
            .map_err(|_| DraftError::ActorClosed)?;
        response.await.map_err(|_| DraftError::ActorDropped)
    }

    /// Append a product to the session's draft; returns the new size.
    pub async fn add(&self, session: &SessionId, product: Product) -> Result<usize, DraftError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DraftRequest::Add {
                session: session.clone(),
                product,
                respond_to,
            })
            .await
            .map_err(|_| DraftError::ActorClosed)?;
        response.await.map_err(|_| DraftError::ActorDropped)
    }

    /// Remove the first draft entry matching `product_id`; `false` when the
    /// draft did not contain it.
    pub async fn remove(
        &self,
        session: &SessionId,
        product_id: ProductId,
    ) -> Result<bool, DraftError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DraftRequest::Remove {
                session: session.clone(),
                product_id,
                respond_to,
            })
            .await
            .map_err(|_| DraftError::ActorClosed)?;
        response.await.map_err(|_| DraftError::ActorDropped)
    }

    /// Clone the session's current draft.
    pub async fn snapshot(&self, session: &SessionId) -> Result<OrderDraft, DraftError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DraftRequest::Snapshot {
                session: session.clone(),
                respond_to,
            })
            .await
            .map_err(|_| DraftError::ActorClosed)?;
        response.await.map_err(|_| DraftError::ActorDropped)
    }

    /// Discard the session's draft unconditionally.
    pub async fn clear(&self, session: &SessionId) -> Result<(), DraftError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(DraftRequest::Clear {
                session: session.clone(),
                respond_to,
            })
            .await
            .map_err(|_| DraftError::ActorClosed)?;
        response.await.map_err(|_| DraftError::ActorDropped)
    }
}
