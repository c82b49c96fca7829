//! Custom actions for the inventory actor.
//!
//! Stock operations the dashboard performs on a single
//! [`InventoryRecord`](crate::model::InventoryRecord) beyond plain CRUD.
//! They are handled in
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action).

use crate::dashboard::StockStatus;

/// Custom actions for inventory records.
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryAction {
    /// Reads the current stock status. Does not modify the record.
    CheckStatus,
    /// Adds units to the stock on hand (the dashboard's Restock button).
    ///
    /// # Errors
    /// Fails with `InvalidQuantity` for zero units.
    Restock(u32),
    /// Applies a signed correction to the stock on hand.
    ///
    /// # Errors
    /// Fails with `InvalidQuantity` for a zero delta and with
    /// `InsufficientStock` if the result would be negative.
    AdjustStock(i64),
}

/// Results from InventoryActions - variants match 1:1 with InventoryAction
#[derive(Debug, Clone, PartialEq)]
pub enum InventoryActionResult {
    CheckStatus(StockStatus),
    /// New quantity after the restock.
    Restock(i64),
    /// New quantity after the adjustment.
    AdjustStock(i64),
}
