//! # System Lifecycle & Orchestration
//!
//! This module manages the runtime lifecycle of the service's actors: opening their storage
//! backends, starting them, handing out clients, and shutting them down in order.
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop the HTTP server** - the router state holds client clones, so it must be gone first
//! 2. **Drop all clients** - closes the sender side of channels
//! 3. **Actors detect closure** - `receiver.recv()` returns `None`
//! 4. **Actors flush** - the registry writes its final snapshot
//! 5. **Await completion** - wait for all actor tasks to finish
//!
//! Tracing is initialized separately with
//! [`setup_tracing`](actor_framework::tracing::setup_tracing).

pub mod api_system;

pub use api_system::*;
