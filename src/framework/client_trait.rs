//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default `get`, `delete` and
//! `snapshot` built on top of a generic [`ResourceClient`].
use crate::framework::{ActorEntity, FrameworkError, ResourceClient, Snapshot};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// Implementors supply the inner client and the error mapping. Everything
/// else is provided.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity with the version it was read at.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<Snapshot<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::map_error)
    }
}
