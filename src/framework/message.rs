//! # Generic Messages
//!
//! Message types exchanged between [`ResourceClient`](crate::framework::ResourceClient)
//! and [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A consistent copy of every entity held by an actor.
///
/// `items` are in insertion order. `version` identifies the state the copy was
/// taken from: two snapshots with the same version hold the same items.
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub version: u64,
    pub items: Vec<T>,
}

/// Internal message type sent to the actor to request operations.
///
/// The variants map to the standard CRUD lifecycle, plus:
///
/// - **Action**: executes a custom [`ActorEntity::Action`] on one entity.
/// - **Snapshot**: returns every entity at once, with the current version.
/// - **Version**: returns only the current version, so callers can decide
///   whether a cached snapshot is still fresh without copying the collection.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Snapshot {
        respond_to: Response<Snapshot<T>>,
    },
    Version {
        respond_to: Response<u64>,
    },
}
