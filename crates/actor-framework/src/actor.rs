//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the storage backend.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::storage::Storage;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`storage`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its own messages *sequentially* in a loop. This means we don't need
/// `Mutex` or `RwLock` around the storage, even for engines whose handles are not `Sync`.
/// The "Actor Model" gives us safety through exclusive ownership of state within the task.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` with a storage backend and an ID generator to
///     get the `actor` (server) and `client` (interface).
/// 2.  **Run**: Spawn the actor's run loop in a background task.
/// 3.  **Stop**: Drop every client; the loop ends, flushes storage and returns.
///
/// ```rust
/// use actor_framework::{ActorEntity, MemoryStorage, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Ticket { id: u32 }
/// #[derive(Debug, thiserror::Error)] #[error("ticket error")] struct TicketError;
///
/// impl ActorEntity for Ticket {
///     type Id = u32;
///     type Create = ();
///     type Error = TicketError;
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, _: ()) -> Result<Self, Self::Error> { Ok(Self { id }) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut next = 0;
///     let (actor, client) = ResourceActor::<Ticket>::new(10, MemoryStorage::new(), move || {
///         next += 1;
///         next
///     });
///     tokio::spawn(actor.run());
///
///     let ticket = client.create(()).await.unwrap();
///     assert_eq!(ticket.id, 1);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: generates an ID, calls `T::from_create_params`, inserts into storage and
///   returns the new entity. A validation error or a storage error leaves storage untouched.
/// * **Get**: looks up the entity by ID.
/// * **Find**: returns the first entity matching the predicate.
/// * **List**: returns every entity.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    storage: Box<dyn Storage<T>>,
    next_id: Box<dyn FnMut() -> T::Id + Send>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `storage` - The backend the actor owns for its whole lifetime.
    /// * `next_id` - Generates the ID of every created entity.
    pub fn new(
        buffer_size: usize,
        storage: impl Storage<T>,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            storage: Box::new(storage),
            next_id: Box::new(next_id),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop on the async runtime, processing messages until the
    /// channel closes.
    ///
    /// Suitable for backends that never block (e.g. [`MemoryStorage`](crate::MemoryStorage)).
    /// Backends doing file or database I/O belong on [`run_blocking`](Self::run_blocking).
    pub async fn run(mut self) {
        let entity_type = Self::entity_type();
        let mut size = self.startup(entity_type);

        while let Some(msg) = self.receiver.recv().await {
            self.handle(entity_type, &mut size, msg);
        }

        self.shutdown(entity_type, size);
    }

    /// Runs the same event loop on the current thread, blocking it between messages.
    ///
    /// Meant for `tokio::task::spawn_blocking`, so storage I/O never stalls a runtime worker:
    ///
    /// ```rust,ignore
    /// let handle = tokio::task::spawn_blocking(move || actor.run_blocking());
    /// ```
    ///
    /// Panics if called from inside an async context.
    pub fn run_blocking(mut self) {
        let entity_type = Self::entity_type();
        let mut size = self.startup(entity_type);

        while let Some(msg) = self.receiver.blocking_recv() {
            self.handle(entity_type, &mut size, msg);
        }

        self.shutdown(entity_type, size);
    }

    fn entity_type() -> &'static str {
        // Extract just the type name (e.g., "Order" instead of "prompt_api::model::order::Order")
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    /// Counts the store once; afterwards the actor tracks the size itself.
    fn startup(&self, entity_type: &str) -> usize {
        let size = self.storage.len().unwrap_or_default();
        info!(entity_type, size, "Actor started");
        size
    }

    fn handle(&mut self, entity_type: &str, size: &mut usize, msg: ResourceRequest<T>) {
        match msg {
            ResourceRequest::Create { params, respond_to } => {
                debug!(entity_type, ?params, "Create");
                let id = (self.next_id)();

                let item = match T::from_create_params(id.clone(), params) {
                    Ok(item) => item,
                    Err(e) => {
                        warn!(entity_type, error = %e, "Create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        return;
                    }
                };

                if let Err(e) = self.storage.insert(&item) {
                    error!(entity_type, %id, error = %e, "Insert failed");
                    let _ = respond_to.send(Err(FrameworkError::Storage(e)));
                    return;
                }
                *size += 1;
                info!(entity_type, %id, size = *size, "Created");
                let _ = respond_to.send(Ok(item));
            }
            ResourceRequest::Get { id, respond_to } => {
                let result = self.storage.get(&id);
                match &result {
                    Ok(item) => debug!(entity_type, %id, found = item.is_some(), "Get"),
                    Err(e) => error!(entity_type, %id, error = %e, "Get failed"),
                }
                let _ = respond_to.send(result.map_err(FrameworkError::from));
            }
            ResourceRequest::Find { filter, respond_to } => {
                let result = self.storage.find(filter.as_ref());
                match &result {
                    Ok(item) => debug!(entity_type, found = item.is_some(), "Find"),
                    Err(e) => error!(entity_type, error = %e, "Find failed"),
                }
                let _ = respond_to.send(result.map_err(FrameworkError::from));
            }
            ResourceRequest::List { respond_to } => {
                let result = self.storage.list();
                match &result {
                    Ok(items) => debug!(entity_type, size = items.len(), "List"),
                    Err(e) => error!(entity_type, error = %e, "List failed"),
                }
                let _ = respond_to.send(result.map_err(FrameworkError::from));
            }
        }
    }

    fn shutdown(&mut self, entity_type: &str, size: usize) {
        // Best effort: a failed final flush is logged, never propagated.
        if let Err(e) = self.storage.flush() {
            warn!(entity_type, error = %e, "Final flush failed");
        }
        info!(entity_type, size, "Shutdown");
    }
}
