//! # Draft Store
//!
//! This module implements the in-progress order state: the product list a
//! user assembles across several independent requests before committing it.
//!
//! ## Overview
//!
//! Drafts are scoped per session. The [`DraftActor`] owns a
//! `HashMap<SessionId, OrderDraft>` and processes requests sequentially
//! from an mpsc channel, so two sessions building orders at the same time
//! can never observe or corrupt each other's draft, and no lock is needed.
//! The cloneable [`DraftClient`] is the only way in.
//!
//! ## Draft lifecycle
//!
//! A session with no entry in the store has an empty draft. Adding a
//! product materializes one; replacing it wholesale with a recorded target
//! order id starts an edit session; committing or cancelling removes the
//! entry again:
//!
//! ```text
//! (absent) --add--------------> building (target: None)
//! (any)    --replace(target)--> editing  (target: Some(order))
//! (any)    --clear------------> (absent)
//! ```
//!
//! Duplicates are permitted — a product ordered twice appears twice — and
//! removal takes the first matching entry only. Removing a product that is
//! not in the draft is a no-op, not an error.
//!
//! ## Structure
//!
//! - [`actor`] - the [`DraftActor`] run loop and its session map
//! - [`client`] - the [`DraftClient`] request API
//! - [`message`] - the request enum carried over the channel
//! - [`error`] - [`DraftError`] for channel failures
//! - [`new()`] - factory function that creates the actor and client

pub mod actor;
pub mod client;
pub mod error;
pub mod message;

pub use actor::DraftActor;
pub use client::DraftClient;
pub use error::DraftError;

use crate::model::{OrderId, Product, ProductId};
use rust_decimal::Decimal;
use std::fmt::Display;
use tokio::sync::mpsc;

/// Identifies the session a draft belongs to. Minted by the (out-of-scope)
/// web layer; the draft store only uses it as a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One session's in-progress order.
///
/// `target` records the order being edited; `None` means the draft builds a
/// new order. Membership, not position, drives cost, and duplicates express
/// quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub target: Option<OrderId>,
    pub products: Vec<Product>,
}

impl OrderDraft {
    /// Whether this draft modifies an existing order.
    pub fn is_edit(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of the product prices — the cost the committed order will carry.
    pub fn cost(&self) -> Decimal {
        self.products.iter().map(|p| p.price).sum()
    }

    /// Sum of the product discounts, used when promoting to a transaction.
    pub fn discount(&self) -> i32 {
        self.products.iter().map(|p| p.discount).sum()
    }

    /// Appends a product. Duplicates are allowed.
    pub fn add(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Removes the first entry matching `product_id`. Returns `false` when
    /// the draft did not contain it; the draft is left untouched.
    pub fn remove_first(&mut self, product_id: ProductId) -> bool {
        match self.products.iter().position(|p| p.id == product_id) {
            Some(index) => {
                self.products.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Creates a new draft store actor and its client.
///
/// # Arguments
///
/// * `buffer_size` - The capacity of the request channel. When full, client
///   calls wait until there is space.
pub fn new(buffer_size: usize) -> (DraftActor, DraftClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (DraftActor::new(receiver), DraftClient::new(sender))
}
