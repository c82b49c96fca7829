//! # Generic Actor Server
//!
//! The [`ResourceActor`] owns the entity store and processes messages
//! sequentially, so the store never needs a lock.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Snapshot};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half of the actor: it owns the state and the receiver
/// end of the channel. Each instance processes its messages one at a time in
/// its own task, so every snapshot it hands out is consistent.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and its client.
/// 2. **Wire**: pass dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// # State
///
/// - `store`: ID to entity.
/// - `order`: IDs in insertion order, so snapshots keep the order items were added.
/// - `next_id`: `u32` counter converted into `T::Id` on create.
/// - `version`: bumped on every successful write (create, update, delete,
///   and actions for which [`ActorEntity::is_mutating`] is true).
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: u32,
    version: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. When the channel is
    /// full, client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
            version: 0,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    fn snapshot(&self) -> Snapshot<T> {
        let items = self
            .order
            .iter()
            .filter_map(|id| self.store.get(id).cloned())
            .collect();
        Snapshot {
            version: self.version,
            items,
        }
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "InventoryRecord" instead of the full module path
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            self.order.push(id.clone());
                            self.version += 1;
                            info!(entity_type, %id, size = self.store.len(), version = self.version, "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        let updated = item.clone();
                        self.version += 1;
                        info!(entity_type, %id, version = self.version, "Updated");
                        let _ = respond_to.send(Ok(updated));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        self.order.retain(|existing| existing != &id);
                        self.version += 1;
                        info!(entity_type, %id, size = self.store.len(), version = self.version, "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let mutating = T::is_mutating(&action);
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => {
                                if mutating {
                                    self.version += 1;
                                }
                                info!(entity_type, %id, version = self.version, "Action ok")
                            }
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Snapshot { respond_to } => {
                    let snapshot = self.snapshot();
                    debug!(entity_type, version = snapshot.version, size = snapshot.items.len(), "Snapshot");
                    let _ = respond_to.send(Ok(snapshot));
                }
                ResourceRequest::Version { respond_to } => {
                    debug!(entity_type, version = self.version, "Version");
                    let _ = respond_to.send(Ok(self.version));
                }
            }
        }

        info!(entity_type, size = self.store.len(), version = self.version, "Shutdown");
    }
}
