//! Type-safe wrappers around the generic `ResourceClient`s, one per actor.

pub mod order_client;
pub mod registry_client;

pub use order_client::OrderClient;
pub use registry_client::RegistryClient;
