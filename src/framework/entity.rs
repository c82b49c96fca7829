//! # ActorEntity Trait
//!
//! The contract a resource must satisfy to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor). It fixes the associated types for IDs,
//! DTOs, actions, context and errors, and provides the lifecycle hooks
//! (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to `Ok(())`.
//! - [`ActorEntity::is_mutating`] defaults to `true`. Override it for read-only
//!   actions so that they do not bump the actor's snapshot version.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks.
/// The `Context` type is injected into every hook at `run()` time, so dependencies
/// are bound late rather than at construction.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `Restock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: clients match on a
    /// single error type regardless of which operation failed.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    /// Whether a successful `action` changes entity state.
    fn is_mutating(_action: &Self::Action) -> bool {
        true
    }
}
