//! # Generic Client
//!
//! The sending half of a [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Snapshot};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a channel sender, so cloning is cheap and clones can be shared
/// across tasks. Every method resolves to `Result<_, FrameworkError>`.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Fetches every entity, in insertion order, with the actor's current version.
    pub async fn snapshot(&self) -> Result<Snapshot<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Snapshot { respond_to })
            .await
    }

    /// Fetches the actor's current version without copying any entity.
    pub async fn version(&self) -> Result<u64, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Version { respond_to })
            .await
    }
}
