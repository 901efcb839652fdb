//! Error types for the API key registry actor.

use thiserror::Error;

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// No generated API exists under the requested ID.
    #[error("Generated API not found: {0}")]
    NotFound(String),

    /// The snapshot backend failed.
    #[error("Registry storage error: {0}")]
    Storage(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for RegistryError {
    fn from(msg: String) -> Self {
        RegistryError::ActorCommunicationError(msg)
    }
}
