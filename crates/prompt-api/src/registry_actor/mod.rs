//! # Registry Actor
//!
//! Issued access keys live in a resource actor over [`GeneratedApi`] records. The backend is
//! chosen at startup: a [`JsonFileStorage`] snapshot when a keys file is configured, plain
//! memory otherwise. Either way the actor is the only owner of the records.
//!
//! - [`entity`] - key minting on create
//! - [`error`] - [`RegistryError`]
//! - [`new()`] / [`snapshot()`] - factories

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{ApiId, GeneratedApi};
use actor_framework::{JsonFileStorage, ResourceActor, ResourceClient, Storage};
use std::path::PathBuf;
use uuid::Uuid;

/// Creates a new registry actor over `storage` and its client. Registry IDs are random UUIDs.
pub fn new(
    storage: impl Storage<GeneratedApi>,
) -> (ResourceActor<GeneratedApi>, ResourceClient<GeneratedApi>) {
    ResourceActor::new(32, storage, || ApiId(Uuid::new_v4().to_string()))
}

/// Opens the registry snapshot at `path`, or an empty snapshot if it is missing or unreadable.
pub fn snapshot(path: impl Into<PathBuf>) -> JsonFileStorage<GeneratedApi> {
    JsonFileStorage::open(path)
}
