//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Predicate used by [`ResourceRequest::Find`] to select an entity.
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages a specific type of resource (the [`ActorEntity`]). Instead of defining
/// ad-hoc messages for every operation, we standardize around the operations that apply to
/// any write-once resource:
///
/// - **Create**: Lifecycle start. Uses [`ActorEntity::Create`] to build and persist a resource.
/// - **Get**: Retrieval by ID.
/// - **Find**: Retrieval of the first resource matching a predicate (linear scan).
/// - **List**: Snapshot of every resource.
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Find {
        filter: Filter<T>,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}
