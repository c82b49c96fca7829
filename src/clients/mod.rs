//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod inventory_client;

pub use crate::framework::ActorClient;
pub use inventory_client::*;
