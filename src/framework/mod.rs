//! Generic actor framework for resource management.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a collection of entities
//! - [`ResourceClient`] - Type-safe, cloneable handle for talking to an actor
//! - [`ActorClient`] - Default operations for resource-specific client wrappers
//! - [`Snapshot`] - Versioned copy of an actor's whole collection
//! - [`FrameworkError`] - Plumbing errors (closed channel, missing item)
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response, Snapshot};
