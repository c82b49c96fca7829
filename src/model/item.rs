//! Inventory records and the DTOs used to create and update them.
//!
//! # Actor Framework
//! [`InventoryRecord`] implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for InventoryRecord`](#impl-ActorEntity-for-InventoryRecord) for details on:
//! - Creation parameters ([`ItemCreate`](crate::model::ItemCreate))
//! - Update parameters ([`ItemUpdate`](crate::model::ItemUpdate))
//! - Custom actions ([`InventoryAction`](crate::inventory_actor::InventoryAction))

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use std::fmt::Display;

use crate::dashboard::StockStatus;
use crate::inventory_actor::InventoryError;

/// Type-safe identifier for inventory items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u32);

impl From<u32> for ItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// A product row as the dashboard sees it.
///
/// Quantities are signed so that a negative value coming from an external
/// source can be reported by [`InventoryRecord::validate`] instead of being
/// silently wrapped. Prices are exact decimals; JSON numbers such as `999.99`
/// parse without binary rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub quantity: i64,
    pub min_stock: i64,
    pub sku: String,
}

impl InventoryRecord {
    /// Creates a new InventoryRecord instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (typically set by the actor system)
    /// * `params` - Name, category, price, stock levels and SKU
    pub fn new(id: ItemId, params: ItemCreate) -> Self {
        Self {
            id,
            name: params.name,
            category: params.category,
            price: params.price,
            quantity: params.quantity,
            min_stock: params.min_stock,
            sku: params.sku,
        }
    }

    /// Current stock status, recomputed on every call.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::of(self.quantity, self.min_stock)
    }

    /// Value of the units on hand, `price * quantity`, exact.
    ///
    /// Saturates at [`Decimal::MAX`] instead of overflowing.
    pub fn stock_value(&self) -> Decimal {
        self.price.saturating_mul(Decimal::from(self.quantity))
    }

    /// Checks the record invariants: non-empty name, non-negative price,
    /// non-negative quantity and reorder threshold.
    pub fn validate(&self) -> Result<(), InventoryError> {
        let invalid = |field: &'static str, value: String| InventoryError::InvalidRecord {
            id: self.id.to_string(),
            field,
            value,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name", format!("{:?}", self.name)));
        }
        if self.price < Decimal::ZERO {
            return Err(invalid("price", self.price.to_string()));
        }
        if self.quantity < 0 {
            return Err(invalid("quantity", self.quantity.to_string()));
        }
        if self.min_stock < 0 {
            return Err(invalid("minStock", self.min_stock.to_string()));
        }
        Ok(())
    }
}

/// Payload for adding an item to the catalog.
///
/// Unknown keys (such as an `id` carried over from an exported fixture) are
/// ignored on deserialization; the catalog assigns its own ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemCreate {
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub price: Decimal,
    pub quantity: i64,
    pub min_stock: i64,
    pub sku: String,
}

/// Payload for updating an existing item. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub quantity: Option<i64>,
    pub min_stock: Option<i64>,
    pub sku: Option<String>,
}

impl ItemUpdate {
    /// Returns `record` with this update applied. The input is left untouched.
    pub fn apply_to(&self, record: &InventoryRecord) -> InventoryRecord {
        let mut next = record.clone();
        if let Some(name) = &self.name {
            next.name = name.clone();
        }
        if let Some(category) = &self.category {
            next.category = category.clone();
        }
        if let Some(price) = self.price {
            next.price = price;
        }
        if let Some(quantity) = self.quantity {
            next.quantity = quantity;
        }
        if let Some(min_stock) = self.min_stock {
            next.min_stock = min_stock;
        }
        if let Some(sku) = &self.sku {
            next.sku = sku.clone();
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> InventoryRecord {
        InventoryRecord::new(
            ItemId(1),
            ItemCreate {
                name: "Laptop".into(),
                category: "Electronics".into(),
                price: Decimal::new(99999, 2),
                quantity: 15,
                min_stock: 5,
                sku: "LP-001".into(),
            },
        )
    }

    #[test]
    fn test_item_id_display() {
        assert_eq!(ItemId(3).to_string(), "item_3");
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(laptop().validate().is_ok());
    }

    #[test]
    fn test_negative_fields_are_reported() {
        let mut record = laptop();
        record.quantity = -1;
        assert_eq!(
            record.validate(),
            Err(InventoryError::InvalidRecord {
                id: "item_1".into(),
                field: "quantity",
                value: "-1".into(),
            })
        );

        let mut record = laptop();
        record.min_stock = -4;
        assert!(matches!(
            record.validate(),
            Err(InventoryError::InvalidRecord { field: "minStock", .. })
        ));

        let mut record = laptop();
        record.price = Decimal::new(-1, 2);
        assert!(matches!(
            record.validate(),
            Err(InventoryError::InvalidRecord { field: "price", .. })
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut record = laptop();
        record.name = "   ".into();
        assert!(matches!(
            record.validate(),
            Err(InventoryError::InvalidRecord { field: "name", .. })
        ));
    }

    #[test]
    fn test_update_applies_only_given_fields() {
        let record = laptop();
        let update = ItemUpdate {
            quantity: Some(4),
            ..Default::default()
        };
        let next = update.apply_to(&record);
        assert_eq!(next.quantity, 4);
        assert_eq!(next.name, "Laptop");
        assert_eq!(next.min_stock, 5);
        assert_eq!(record.quantity, 15);
    }

    #[test]
    fn test_stock_value_is_exact() {
        assert_eq!(laptop().stock_value(), Decimal::new(1499985, 2));

        let mut record = laptop();
        record.price = Decimal::MAX;
        assert_eq!(record.stock_value(), Decimal::MAX);
    }

    #[test]
    fn test_price_parses_from_json_number() {
        let params: ItemCreate = serde_json::from_str(
            r#"{"name": "Pen", "price": 0.1, "quantity": 1, "minStock": 0, "sku": "PN-1"}"#,
        )
        .unwrap();
        assert_eq!(params.price, Decimal::new(1, 1));
        assert_eq!(params.category, "");
    }

    #[test]
    fn test_serializes_min_stock_in_camel_case() {
        let json = serde_json::to_value(laptop()).unwrap();
        assert_eq!(json["minStock"], 5);
        assert_eq!(json["id"], 1);
    }
}
