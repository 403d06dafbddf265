//! # System Lifecycle & Orchestration
//!
//! This module wires the application together: transport construction,
//! gateway and client creation, draft actor startup, and graceful shutdown.
//!
//! ## The SnackbarSystem pattern
//!
//! [`SnackbarSystem`] is the single place the dependency graph is built:
//!
//! 1. **Transport** — from configuration (HTTP) or injected (tests)
//! 2. **Gateway & clients** — one typed client per entity kind, all sharing
//!    the transport
//! 3. **Draft actor** — spawned into its own task; every handle talks to it
//!    through the same channel
//! 4. **Workflow** — handed clones of the clients it composes
//!
//! ## Graceful Shutdown
//!
//! The shutdown pattern follows these steps:
//!
//! 1. **Drop the draft client handles** — closes the sender side of the
//!    channel (the workflow holds one, so it is dropped too)
//! 2. **The actor detects closure** — `receiver.recv()` returns `None`
//! 3. **The actor cleans up** — drains remaining messages, logs final state
//! 4. **Await completion** — the actor task is joined; a panic surfaces as
//!    an error
//!
//! Gateway clients hold no background tasks; dropping them needs no
//! coordination.

pub mod system;

pub use system::*;
