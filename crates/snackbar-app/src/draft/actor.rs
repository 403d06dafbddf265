//! # Draft Actor
//!
//! The server half of the draft store. It owns the session map and the
//! receiver end of the channel, and processes messages one at a time —
//! exclusive ownership of the map within the task replaces any locking.
//!
//! The map is keyed by [`SessionId`]: each browser session gets its own
//! draft, so concurrent users never share state. A session with no entry
//! simply has an empty draft; `Add` materializes an entry, `Clear` removes
//! it again, which keeps the map from accumulating finished sessions.

use super::message::DraftRequest;
use super::{OrderDraft, SessionId};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info};

pub struct DraftActor {
    receiver: mpsc::Receiver<DraftRequest>,
    drafts: HashMap<SessionId, OrderDraft>,
}

impl DraftActor {
    pub(super) fn new(receiver: mpsc::Receiver<DraftRequest>) -> Self {
        Self {
            receiver,
            drafts: HashMap::new(),
        }
    }

    /// Runs the actor's event loop, processing messages until every client
    /// handle has been dropped.
    pub async fn run(mut self) {
        info!("Draft store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                DraftRequest::Replace {
                    session,
                    target,
                    products,
                    respond_to,
                } => {
                    debug!(%session, ?target, count = products.len(), "Replace");
                    self.drafts
                        .insert(session, OrderDraft { target, products });
                    let _ = respond_to.send(());
                }
                DraftRequest::Add {
                    session,
                    product,
                    respond_to,
                } => {
                    let draft = self.drafts.entry(session.clone()).or_default();
                    draft.add(product);
                    info!(%session, size = draft.products.len(), "Product added");
                    let _ = respond_to.send(draft.products.len());
                }
                DraftRequest::Remove {
                    session,
                    product_id,
                    respond_to,
                } => {
                    let removed = self
                        .drafts
                        .get_mut(&session)
                        .map(|draft| draft.remove_first(product_id))
                        .unwrap_or(false);
                    if removed {
                        info!(%session, %product_id, "Product removed");
                    } else {
                        debug!(%session, %product_id, "Product not in draft");
                    }
                    let _ = respond_to.send(removed);
                }
                DraftRequest::Snapshot { session, respond_to } => {
                    let draft = self.drafts.get(&session).cloned().unwrap_or_default();
                    debug!(%session, size = draft.products.len(), "Snapshot");
                    let _ = respond_to.send(draft);
                }
                DraftRequest::Clear { session, respond_to } => {
                    self.drafts.remove(&session);
                    info!(%session, "Draft cleared");
                    let _ = respond_to.send(());
                }
            }
        }

        info!(sessions = self.drafts.len(), "Draft store shutdown");
    }
}
