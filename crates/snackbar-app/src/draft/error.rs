//! Error types for the draft store.

use thiserror::Error;

/// Errors that can occur while talking to the draft actor. Store operations
/// themselves are infallible; these only describe a dead channel.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DraftError {
    /// The draft actor is no longer accepting requests.
    #[error("draft actor closed")]
    ActorClosed,

    /// The draft actor dropped the response channel.
    #[error("draft actor dropped response channel")]
    ActorDropped,
}
