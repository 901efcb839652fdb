//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (an order, a generated
//! API record, …) must implement to be managed by the generic `ResourceActor`. It specifies
//! associated types for IDs, the creation DTO and errors. Implementing this trait gives a
//! resource the uniform Create / Get / Find / List API of the framework.
//!
//! # Architecture Note
//! By defining a contract (`ActorEntity`) that all our resource types must satisfy, we
//! write the `ResourceActor` logic *once* and reuse it for every resource.
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type safety.
//! An `Order` requires an `OrderCreate` payload, and you can't accidentally send it
//! a payload meant for another resource.
//!
//! # Write-once Resources
//! Resources managed by the framework are immutable after creation. There is no update or
//! delete path, so the entity only has to know how to build itself from a DTO.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., a UUID newtype).
    /// IDs are produced by the generator handed to [`ResourceActor::new`](crate::ResourceActor::new).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// The framework enforces a **Per-Actor Error Type** (one enum for the whole actor) rather
    /// than per-message error types. Clients recover it from
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) by downcasting.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the identifier of this entity.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and Payload.
    ///
    /// This is where creation-time validation lives: returning an error here means
    /// nothing is written to storage.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;
}
