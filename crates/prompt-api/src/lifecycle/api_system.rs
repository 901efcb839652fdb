use crate::clients::{OrderClient, RegistryClient};
use crate::config::Config;
use crate::model::{GeneratedApi, Order};
use crate::order_actor::SqliteOrderStorage;
use crate::registry_actor;
use actor_framework::{MemoryStorage, Storage, StorageError};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Failed to open order store: {0}")]
    OrderStore(#[source] StorageError),

    #[error("Actor task failed: {0}")]
    ActorFailed(String),
}

/// The runtime orchestrator for the registry and order actors.
///
/// # Example
///
/// ```ignore
/// let system = ApiSystem::start(&config)?;
///
/// let issued = system.registry_client.issue(prompt, generated).await?;
/// let order = system.order_client.create_order(params).await?;
///
/// system.shutdown().await?;
/// ```
pub struct ApiSystem {
    /// Client for the API key registry actor
    pub registry_client: RegistryClient,

    /// Client for the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ApiSystem {
    /// Opens the backends named by `config` and starts both actors.
    ///
    /// The order database must open; the registry snapshot never blocks startup (a missing
    /// or unreadable file yields an empty registry).
    pub fn start(config: &Config) -> Result<Self, SystemError> {
        let orders =
            SqliteOrderStorage::open(&config.db_path).map_err(SystemError::OrderStore)?;
        info!(path = %config.db_path.display(), "Opened order store");

        let system = match &config.keys_file {
            Some(path) => Self::with_storage(registry_actor::snapshot(path.clone()), orders),
            None => {
                warn!("KEYS_FILE is empty, issued keys will not survive a restart");
                Self::with_storage(MemoryStorage::new(), orders)
            }
        };
        Ok(system)
    }

    /// Starts both actors over the given backends, each on its own blocking thread.
    pub fn with_storage(
        registry: impl Storage<GeneratedApi>,
        orders: impl Storage<Order>,
    ) -> Self {
        let (registry_actor, registry_client) = registry_actor::new(registry);
        let (order_actor, order_client) = crate::order_actor::new(orders);

        // Both backends do file or database I/O, so neither loop may run on a runtime worker.
        let registry_handle = tokio::task::spawn_blocking(move || registry_actor.run_blocking());
        let order_handle = tokio::task::spawn_blocking(move || order_actor.run_blocking());

        Self {
            registry_client: RegistryClient::new(registry_client),
            order_client: OrderClient::new(order_client),
            handles: vec![registry_handle, order_handle],
        }
    }

    /// Gracefully shuts down both actors.
    ///
    /// Every other clone of the clients (e.g. inside a router) must already be dropped, or
    /// this waits for them.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(SystemError::ActorFailed)` if any actor task panicked
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down actors...");

        // Closing the channels ends each actor's loop; the registry flushes its snapshot.
        drop(self.registry_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(SystemError::ActorFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
