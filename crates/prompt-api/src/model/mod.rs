//! Pure data structures (DTOs) implementing the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! plus the static specification document they carry.

pub mod generated_api;
pub mod order;
pub mod spec;

pub use generated_api::*;
pub use order::*;
pub use spec::*;
