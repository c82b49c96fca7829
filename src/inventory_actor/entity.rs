//! [`ActorEntity`] implementation for [`InventoryRecord`].
//!
//! Every write goes through [`InventoryRecord::validate`], so the catalog never
//! holds a record the aggregator would reject.

use async_trait::async_trait;

use super::actions::{InventoryAction, InventoryActionResult};
use super::error::InventoryError;
use crate::framework::ActorEntity;
use crate::model::{InventoryRecord, ItemCreate, ItemId, ItemUpdate};

#[async_trait]
impl ActorEntity for InventoryRecord {
    type Id = ItemId;
    type Create = ItemCreate;
    type Update = ItemUpdate;
    type Action = InventoryAction;
    type ActionResult = InventoryActionResult;
    type Context = ();
    type Error = InventoryError;

    fn from_create_params(id: ItemId, params: ItemCreate) -> Result<Self, Self::Error> {
        let record = Self::new(id, params);
        record.validate()?;
        Ok(record)
    }

    /// Applies the update to a copy and commits it only if the result is valid.
    async fn on_update(&mut self, update: ItemUpdate, _ctx: &()) -> Result<(), Self::Error> {
        let next = update.apply_to(self);
        next.validate()?;
        *self = next;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: InventoryAction,
        _ctx: &(),
    ) -> Result<InventoryActionResult, Self::Error> {
        match action {
            InventoryAction::CheckStatus => Ok(InventoryActionResult::CheckStatus(self.stock_status())),
            InventoryAction::Restock(units) => {
                if units == 0 {
                    return Err(InventoryError::InvalidQuantity(0));
                }
                self.quantity = self.quantity.saturating_add(i64::from(units));
                Ok(InventoryActionResult::Restock(self.quantity))
            }
            InventoryAction::AdjustStock(delta) => {
                if delta == 0 {
                    return Err(InventoryError::InvalidQuantity(0));
                }
                match self.quantity.checked_add(delta) {
                    Some(next) if next >= 0 => self.quantity = next,
                    _ => {
                        return Err(InventoryError::InsufficientStock {
                            requested: delta.saturating_neg(),
                            available: self.quantity,
                        })
                    }
                }
                Ok(InventoryActionResult::AdjustStock(self.quantity))
            }
        }
    }

    fn is_mutating(action: &InventoryAction) -> bool {
        !matches!(action, InventoryAction::CheckStatus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::StockStatus;
    use rust_decimal::Decimal;

    fn notebook() -> InventoryRecord {
        InventoryRecord::new(
            ItemId(3),
            ItemCreate {
                name: "Notebook".into(),
                category: "Stationery".into(),
                price: Decimal::new(499, 2),
                quantity: 2,
                min_stock: 10,
                sku: "NB-003".into(),
            },
        )
    }

    #[test]
    fn test_create_rejects_invalid_params() {
        let mut params = ItemCreate {
            name: "Notebook".into(),
            category: "Stationery".into(),
            price: Decimal::new(499, 2),
            quantity: -2,
            min_stock: 10,
            sku: "NB-003".into(),
        };
        let err = InventoryRecord::from_create_params(ItemId(1), params.clone()).unwrap_err();
        assert!(matches!(err, InventoryError::InvalidRecord { field: "quantity", .. }));

        params.quantity = 2;
        assert!(InventoryRecord::from_create_params(ItemId(1), params).is_ok());
    }

    #[tokio::test]
    async fn test_restock_clears_low_stock() {
        let mut record = notebook();
        let result = record.handle_action(InventoryAction::Restock(20), &()).await;
        assert_eq!(result, Ok(InventoryActionResult::Restock(22)));
        assert_eq!(record.stock_status(), StockStatus::InStock);
    }

    #[tokio::test]
    async fn test_zero_restock_rejected() {
        let mut record = notebook();
        let result = record.handle_action(InventoryAction::Restock(0), &()).await;
        assert_eq!(result, Err(InventoryError::InvalidQuantity(0)));
        assert_eq!(record.quantity, 2);
    }

    #[tokio::test]
    async fn test_adjust_cannot_go_negative() {
        let mut record = notebook();
        let result = record.handle_action(InventoryAction::AdjustStock(-3), &()).await;
        assert_eq!(
            result,
            Err(InventoryError::InsufficientStock {
                requested: 3,
                available: 2
            })
        );

        let result = record.handle_action(InventoryAction::AdjustStock(-2), &()).await;
        assert_eq!(result, Ok(InventoryActionResult::AdjustStock(0)));
        assert_eq!(record.stock_status(), StockStatus::OutOfStock);
    }

    #[tokio::test]
    async fn test_invalid_update_leaves_record_untouched() {
        let mut record = notebook();
        let update = ItemUpdate {
            name: Some("Legal Pad".into()),
            price: Some(Decimal::from(-1)),
            ..Default::default()
        };
        let err = record.on_update(update, &()).await.unwrap_err();
        assert!(matches!(err, InventoryError::InvalidRecord { field: "price", .. }));
        assert_eq!(record, notebook());
    }

    #[test]
    fn test_only_check_status_is_read_only() {
        assert!(!InventoryRecord::is_mutating(&InventoryAction::CheckStatus));
        assert!(InventoryRecord::is_mutating(&InventoryAction::Restock(1)));
        assert!(InventoryRecord::is_mutating(&InventoryAction::AdjustStock(-1)));
    }
}
