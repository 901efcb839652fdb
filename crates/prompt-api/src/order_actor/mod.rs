//! # Order Actor
//!
//! The order store as a resource actor: the actor owns the SQLite connection and processes
//! creates and lookups one at a time.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation and payload validation
//! - [`error`] - [`OrderError`] type for type-safe error handling
//! - [`storage`] - [`SqliteOrderStorage`], the single-table backend
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use prompt_api::order_actor::{self, SqliteOrderStorage};
//! use prompt_api::clients::OrderClient;
//! use prompt_api::model::OrderCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_actor::new(SqliteOrderStorage::open_in_memory()?);
//!     let client = OrderClient::new(generic_client);
//!     let handle = tokio::task::spawn_blocking(move || actor.run_blocking());
//!
//!     let order = client
//!         .create_order(OrderCreate::new(vec![serde_json::json!("widget")], 10))
//!         .await?;
//!     assert_eq!(order.status, prompt_api::model::OrderStatus::Pending);
//!
//!     drop(client);
//!     handle.await?;
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;
pub mod storage;

pub use error::*;
pub use storage::SqliteOrderStorage;

use crate::model::{Order, OrderId};
use actor_framework::{ResourceActor, ResourceClient, Storage};
use uuid::Uuid;

/// Creates a new Order actor over `storage` and its client. Order IDs are random UUIDs.
pub fn new(storage: impl Storage<Order>) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(32, storage, || OrderId(Uuid::new_v4().to_string()))
}
