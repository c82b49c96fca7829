//! # Inventory Client
//!
//! High-level API for the inventory actor. Wraps a
//! `ResourceClient<InventoryRecord>` and exposes catalog operations with
//! [`InventoryError`] as the single error type.
use crate::dashboard::StockStatus;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::inventory_actor::{InventoryAction, InventoryActionResult, InventoryError};
use crate::model::{InventoryRecord, ItemCreate, ItemId, ItemUpdate};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Client for interacting with the inventory actor.
#[derive(Clone)]
pub struct InventoryClient {
    inner: ResourceClient<InventoryRecord>,
}

impl InventoryClient {
    pub fn new(inner: ResourceClient<InventoryRecord>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<InventoryRecord> for InventoryClient {
    type Error = InventoryError;

    fn inner(&self) -> &ResourceClient<InventoryRecord> {
        &self.inner
    }

    /// Recovers the structured [`InventoryError`] raised inside the actor.
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<InventoryError>() {
                Ok(err) => *err,
                Err(other) => InventoryError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => InventoryError::NotFound(id),
            other => InventoryError::ActorCommunicationError(other.to_string()),
        }
    }
}

fn unexpected(result: InventoryActionResult) -> InventoryError {
    InventoryError::ActorCommunicationError(format!("unexpected action result: {:?}", result))
}

impl InventoryClient {
    /// Adds one item to the catalog.
    #[instrument(skip(self, params), fields(sku = %params.sku))]
    pub async fn add_item(&self, params: ItemCreate) -> Result<ItemId, InventoryError> {
        debug!(?params, "add_item called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Adds items in order and returns their ids.
    ///
    /// Stops at the first rejected item with [`InventoryError::InvalidBatch`].
    /// Items before it stay in the catalog.
    #[instrument(skip(self, items), fields(count = items.len()))]
    pub async fn import(&self, items: Vec<ItemCreate>) -> Result<Vec<ItemId>, InventoryError> {
        let mut ids = Vec::with_capacity(items.len());
        for (index, params) in items.into_iter().enumerate() {
            match self.inner.create(params).await {
                Ok(id) => ids.push(id),
                Err(e) => {
                    let source = Self::map_error(e);
                    warn!(index, error = %source, "Import stopped");
                    return Err(InventoryError::InvalidBatch {
                        index,
                        source: Box::new(source),
                    });
                }
            }
        }
        info!(imported = ids.len(), "Import complete");
        Ok(ids)
    }

    /// Applies a partial update and returns the stored record.
    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: ItemId,
        update: ItemUpdate,
    ) -> Result<InventoryRecord, InventoryError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Current stock status of one item.
    #[instrument(skip(self))]
    pub async fn check_status(&self, id: ItemId) -> Result<StockStatus, InventoryError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, InventoryAction::CheckStatus)
            .await
            .map_err(Self::map_error)?
        {
            InventoryActionResult::CheckStatus(status) => Ok(status),
            other => Err(unexpected(other)),
        }
    }

    /// Adds `units` to an item's stock and returns the new quantity.
    #[instrument(skip(self))]
    pub async fn restock(&self, id: ItemId, units: u32) -> Result<i64, InventoryError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, InventoryAction::Restock(units))
            .await
            .map_err(Self::map_error)?
        {
            InventoryActionResult::Restock(quantity) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    /// Applies a signed stock correction and returns the new quantity.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&self, id: ItemId, delta: i64) -> Result<i64, InventoryError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, InventoryAction::AdjustStock(delta))
            .await
            .map_err(Self::map_error)?
        {
            InventoryActionResult::AdjustStock(quantity) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    /// Current catalog version. Changes whenever the catalog contents change.
    #[instrument(skip(self))]
    pub async fn version(&self) -> Result<u64, InventoryError> {
        self.inner.version().await.map_err(Self::map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_create, MockClient};
    use crate::framework::Snapshot;

    fn params(name: &str, quantity: i64) -> ItemCreate {
        ItemCreate {
            name: name.into(),
            category: "Test".into(),
            price: rust_decimal::Decimal::ONE,
            quantity,
            min_stock: 2,
            sku: format!("{}-1", name),
        }
    }

    #[tokio::test]
    async fn test_restock_sends_units_and_returns_quantity() {
        let (client, mut receiver) = create_mock_client::<InventoryRecord>(10);
        let inventory_client = InventoryClient::new(client);

        let restock_task = tokio::spawn(async move { inventory_client.restock(ItemId(4), 10).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ItemId(4));
        assert_eq!(action, InventoryAction::Restock(10));

        responder
            .send(Ok(InventoryActionResult::Restock(10)))
            .unwrap();

        assert_eq!(restock_task.await.unwrap(), Ok(10));
    }

    #[tokio::test]
    async fn test_entity_error_is_recovered() {
        let (client, mut receiver) = create_mock_client::<InventoryRecord>(10);
        let inventory_client = InventoryClient::new(client);

        let adjust_task =
            tokio::spawn(async move { inventory_client.adjust_stock(ItemId(3), -5).await });

        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(action, InventoryAction::AdjustStock(-5));

        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                InventoryError::InsufficientStock {
                    requested: 5,
                    available: 2,
                },
            ))))
            .unwrap();

        assert_eq!(
            adjust_task.await.unwrap(),
            Err(InventoryError::InsufficientStock {
                requested: 5,
                available: 2
            })
        );
    }

    #[tokio::test]
    async fn test_foreign_entity_error_becomes_communication_error() {
        let (client, mut receiver) = create_mock_client::<InventoryRecord>(10);
        let inventory_client = InventoryClient::new(client);

        let task = tokio::spawn(async move { inventory_client.check_status(ItemId(1)).await });

        let (_, _, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(
                std::io::Error::other("disk on fire"),
            ))))
            .unwrap();

        match task.await.unwrap() {
            Err(InventoryError::ActorCommunicationError(msg)) => assert!(msg.contains("disk on fire")),
            other => panic!("Expected ActorCommunicationError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mismatched_action_result_is_an_error() {
        let (client, mut receiver) = create_mock_client::<InventoryRecord>(10);
        let inventory_client = InventoryClient::new(client);

        let task = tokio::spawn(async move { inventory_client.restock(ItemId(1), 1).await });

        let (_, _, responder) = expect_action(&mut receiver).await.unwrap();
        responder
            .send(Ok(InventoryActionResult::CheckStatus(StockStatus::InStock)))
            .unwrap();

        assert!(matches!(
            task.await.unwrap(),
            Err(InventoryError::ActorCommunicationError(_))
        ));
    }

    #[tokio::test]
    async fn test_not_found_maps_to_not_found() {
        let mut mock = MockClient::<InventoryRecord>::new();
        mock.expect_update()
            .return_err(FrameworkError::NotFound("item_9".into()));

        let client = InventoryClient::new(mock.client());
        let result = client.update_item(ItemId(9), ItemUpdate::default()).await;
        assert_eq!(result, Err(InventoryError::NotFound("item_9".into())));
        mock.verify();
    }

    #[tokio::test]
    async fn test_import_reports_failing_position() {
        let mut mock = MockClient::<InventoryRecord>::new();
        mock.expect_create().return_ok(ItemId(1));
        mock.expect_create()
            .return_err(FrameworkError::EntityError(Box::new(
                InventoryError::InvalidRecord {
                    id: "item_2".into(),
                    field: "quantity",
                    value: "-1".into(),
                },
            )));

        let client = InventoryClient::new(mock.client());
        let result = client
            .import(vec![params("Pen", 4), params("Ink", -1), params("Pad", 3)])
            .await;

        match result {
            Err(InventoryError::InvalidBatch { index, source }) => {
                assert_eq!(index, 1);
                assert!(matches!(*source, InventoryError::InvalidRecord { field: "quantity", .. }));
            }
            other => panic!("Expected InvalidBatch, got {:?}", other),
        }
        // the third item is never sent
        mock.verify();
    }

    #[tokio::test]
    async fn test_add_item_forwards_params() {
        let (client, mut receiver) = create_mock_client::<InventoryRecord>(10);
        let inventory_client = InventoryClient::new(client);

        let task = tokio::spawn(async move { inventory_client.add_item(params("Pen", 4)).await });

        let (sent, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(sent.name, "Pen");
        assert_eq!(sent.quantity, 4);
        responder.send(Ok(ItemId(1))).unwrap();

        assert_eq!(task.await.unwrap(), Ok(ItemId(1)));
    }

    #[tokio::test]
    async fn test_snapshot_and_version_from_mock() {
        let mut mock = MockClient::<InventoryRecord>::new();
        mock.expect_version().return_ok(3);
        mock.expect_snapshot().return_ok(Snapshot {
            version: 3,
            items: vec![],
        });

        let client = InventoryClient::new(mock.client());
        assert_eq!(client.version().await, Ok(3));
        let snapshot = client.snapshot().await.unwrap();
        assert_eq!(snapshot.version, 3);
        assert!(snapshot.items.is_empty());
        mock.verify();
    }
}
