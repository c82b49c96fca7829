//! Stock-status classification and its presentation mapping.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::model::InventoryRecord;

/// Where an item stands relative to its reorder threshold.
///
/// Derived from `quantity` and `min_stock` on every read; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    InStock,
}

/// How urgently a status needs attention. `Normal < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Normal,
    Medium,
    High,
}

impl StockStatus {
    /// Classifies a stock level.
    ///
    /// Zero units is out of stock whatever the threshold. Otherwise the
    /// threshold is inclusive: `quantity == min_stock` is still low.
    pub fn of(quantity: i64, min_stock: i64) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity <= min_stock {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// True for every status that belongs in the alerts panel.
    pub fn is_alert(self) -> bool {
        self != StockStatus::InStock
    }

    pub fn severity(self) -> Severity {
        match self {
            StockStatus::OutOfStock => Severity::High,
            StockStatus::LowStock => Severity::Medium,
            StockStatus::InStock => Severity::Normal,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
        }
    }

    /// One-letter badge text for narrow layouts.
    pub fn short_label(self) -> char {
        match self {
            StockStatus::OutOfStock => 'O',
            StockStatus::LowStock => 'L',
            StockStatus::InStock => 'I',
        }
    }

    /// CSS classes for the status badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "bg-red-100 text-red-800",
            StockStatus::LowStock => "bg-yellow-100 text-yellow-800",
            StockStatus::InStock => "bg-green-100 text-green-800",
        }
    }

    /// CSS class for the coloured dot next to an alert row.
    pub fn indicator_class(self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "bg-red-500",
            StockStatus::LowStock => "bg-yellow-500",
            StockStatus::InStock => "bg-green-500",
        }
    }
}

impl Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies one record. Total and side-effect free.
pub fn classify(record: &InventoryRecord) -> StockStatus {
    StockStatus::of(record.quantity, record.min_stock)
}
