//! # Inventory Actor
//!
//! The catalog that owns the dashboard's inventory records.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`InventoryRecord`]
//! - [`error`] - [`InventoryError`], shared with the pure dashboard helpers
//! - [`actions`] - [`InventoryAction`] and [`InventoryActionResult`] for stock changes
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use storefront_inventory::inventory_actor;
//! use storefront_inventory::model::sample_inventory;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = inventory_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let ids = client.import(sample_inventory()).await?;
//!     let quantity = client.restock(ids[3], 10).await?;
//!     assert_eq!(quantity, 10);
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **Validated writes**: creates and updates are rejected with `InvalidRecord`
//!   instead of storing a record the aggregator cannot summarize
//! - **Versioned reads**: `CheckStatus` leaves the catalog version alone, every
//!   other successful write bumps it

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::InventoryClient;
use crate::framework::ResourceActor;
use crate::model::InventoryRecord;

/// Creates a new inventory actor and its client.
///
/// `capacity` bounds the request channel.
pub fn new(capacity: usize) -> (ResourceActor<InventoryRecord>, InventoryClient) {
    let (actor, generic_client) = ResourceActor::new(capacity);
    (actor, InventoryClient::new(generic_client))
}
