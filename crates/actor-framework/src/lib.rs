//! # Actor Framework
//!
//! This crate provides the foundational building blocks for creating type-safe, concurrent
//! actor systems in Rust. It implements a **Resource-Oriented Architecture (ROA)** pattern
//! on top of the **Actor Model**, providing a clean abstraction for managing write-once
//! resources behind a pluggable storage backend.
//!
//! ## Why ROA + Actor Model?
//!
//! - **Resources**: every resource type gets the same Create / Get / Find / List surface.
//! - **Actors**: isolated state, message passing, sequential processing inside each actor.
//! - **Storage ownership**: the actor task owns its backend outright, so a SQLite connection
//!   or a snapshot file needs no locking discipline beyond the actor's message loop.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your domain model and its creation rules
//! 2. **Storage Layer** ([`Storage`]) - Where entities live (memory, JSON snapshot, your own)
//! 3. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 4. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Quick Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, MemoryStorage, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("name must not be empty")]
//! struct UserError;
//!
//! impl ActorEntity for User {
//!     type Id = u32;
//!     type Create = String;
//!     type Error = UserError;
//!
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create_params(id: u32, name: String) -> Result<Self, Self::Error> {
//!         if name.is_empty() {
//!             return Err(UserError);
//!         }
//!         Ok(Self { id, name })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut next = 0;
//!     let (actor, client) = ResourceActor::<User>::new(10, MemoryStorage::new(), move || {
//!         next += 1;
//!         next
//!     });
//!     tokio::spawn(actor.run());
//!
//!     let user = client.create("Alice".into()).await.unwrap();
//!     let fetched = client.get(user.id).await.unwrap().unwrap();
//!     assert_eq!(fetched.name, "Alice");
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed!)
//! - Multiple actors run in **parallel**
//! - Dropping every client closes the channel; the actor flushes its storage and exits
//!
//! ## Testing
//!
//! The [`mock`] module hands out real `ResourceClient`s answered from expectations, for fast
//! deterministic tests of client wrappers without spawning actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod storage;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::{FrameworkError, StorageError};
pub use message::{Filter, ResourceRequest, Response};
pub use storage::{JsonFileStorage, MemoryStorage, Storage};
