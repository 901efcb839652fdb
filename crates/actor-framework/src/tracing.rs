//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! The framework uses a compact format that hides the crate/module prefix (`with_target(false)`);
//! actors identify themselves through the `entity_type` field instead.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default when RUST_LOG is unset)
//! RUST_LOG=info cargo run
//!
//! # Show full create payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=actor_framework=debug,tower_http=debug cargo run
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, shutdown and final store size
//! - **Entity Operations**: Create, Get, Find and List
//! - **Storage**: snapshot loads, failed writes and failed flushes
//!
//! With `RUST_LOG=info` an order creation looks like:
//!
//! ```text
//! INFO Created entity_type="Order" id=6f1c… size=3
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Falls back to `info` when `RUST_LOG` is unset or invalid.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
