//! # Observability & Tracing
//!
//! This module provides the tracing setup shared by every binary and test
//! harness in the workspace.
//!
//! ## Configuration
//!
//! The subscriber uses a compact format that hides the crate/module prefix
//! (`with_target(false)`); the structured fields on each event carry the
//! interesting context instead.
//!
//! - **Structured logging** with the `tracing` crate
//! - **Hierarchical spans** from `#[instrument]` on client and workflow methods
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//!
//! ## What Gets Traced
//!
//! - Draft actor lifecycle (startup, shutdown, final store size)
//! - Draft mutations (replace, add, remove, clear) with session ids
//! - Gateway operations (method, path, status) and their failures
//! - Workflow steps with complete request context
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Structured fields carry the context instead
        .compact()
        .init();
}
