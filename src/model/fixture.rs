//! Sample inventory and JSON fixture loading.
//!
//! The catalog does not care where its items come from; these helpers cover the
//! two sources the dashboard ships with: the built-in sample set and JSON
//! documents in the same camelCase shape.

use rust_decimal::Decimal;

use crate::inventory_actor::InventoryError;
use crate::model::{InventoryRecord, ItemCreate};

/// The five-item sample catalog the dashboard starts with.
pub fn sample_inventory() -> Vec<ItemCreate> {
    // prices in cents
    let item = |name: &str, category: &str, price: i64, quantity: i64, min_stock: i64, sku: &str| {
        ItemCreate {
            name: name.to_string(),
            category: category.to_string(),
            price: Decimal::new(price, 2),
            quantity,
            min_stock,
            sku: sku.to_string(),
        }
    };

    vec![
        item("Laptop", "Electronics", 99999, 15, 5, "LP-001"),
        item("Office Chair", "Furniture", 19999, 8, 3, "OC-002"),
        item("Notebook", "Stationery", 499, 2, 10, "NB-003"),
        item("Desk Lamp", "Electronics", 2999, 0, 5, "DL-004"),
        item("Stapler", "Stationery", 1299, 25, 8, "ST-005"),
    ]
}

/// Parses a JSON array of items to add to a catalog.
///
/// Values are not validated here; the catalog rejects invalid items on create.
pub fn parse_items(json: &str) -> Result<Vec<ItemCreate>, InventoryError> {
    serde_json::from_str(json).map_err(|e| InventoryError::Fixture(e.to_string()))
}

/// Parses a JSON array of complete records, ids included.
///
/// Use with [`try_summarize`](crate::dashboard::try_summarize) to validate and
/// aggregate an external batch in one step.
pub fn parse_records(json: &str) -> Result<Vec<InventoryRecord>, InventoryError> {
    serde_json::from_str(json).map_err(|e| InventoryError::Fixture(e.to_string()))
}
