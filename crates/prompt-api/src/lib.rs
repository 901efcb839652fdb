//! # Prompt API
//!
//! A small HTTP service that turns a prompt describing an Orders API into a canned
//! specification plus an access key, and then serves that Orders API.
//!
//! ## Core Components
//!
//! - **[generator]**: the prompt matcher, a pure function over the prompt text.
//! - **[model]**: data structures ([`Order`](model::Order), [`GeneratedApi`](model::GeneratedApi))
//!   that implement the `ActorEntity` trait, plus the static spec document.
//! - **[order_actor]** / **[registry_actor]**: the two resource actors and their storage backends.
//! - **[clients]**: type-safe wrappers that hide the message passing.
//! - **[lifecycle]**: starts and stops the actors.
//! - **[http]**: the axum router.
//! - **[config]**: environment-driven settings.

pub mod clients;
pub mod config;
pub mod generator;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod registry_actor;
