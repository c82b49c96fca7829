//! Aggregate statistics and the alerts list over an inventory snapshot.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::dashboard::status::{classify, StockStatus};
use crate::inventory_actor::InventoryError;
use crate::model::{InventoryRecord, ItemId};

/// Figures behind the dashboard's stat cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    pub total_products: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// Sum of `price * quantity`, exact and unrounded.
    pub total_value: Decimal,
}

impl SummaryStats {
    /// Total value rounded to cents for display, e.g. `"$16934.50"`.
    pub fn display_total_value(&self, currency_symbol: &str) -> String {
        format_currency(self.total_value, currency_symbol)
    }

    /// Items needing attention (low plus out of stock).
    pub fn alert_count(&self) -> usize {
        self.low_stock + self.out_of_stock
    }
}

/// Formats an amount with two decimal places behind `currency_symbol`.
///
/// Halves round away from zero, so `0.015` shows as `0.02`.
pub fn format_currency(amount: Decimal, currency_symbol: &str) -> String {
    let cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{}{:.2}", currency_symbol, cents)
}

/// Computes [`SummaryStats`] in one pass.
///
/// Total over any input, empty included; the input is only read. Decimal
/// addition is exact, so any ordering of the same records gives the same
/// stats. Nothing is rounded here.
pub fn summarize<'a, I>(records: I) -> SummaryStats
where
    I: IntoIterator<Item = &'a InventoryRecord>,
{
    records
        .into_iter()
        .fold(SummaryStats::default(), |mut stats, record| {
            stats.total_products += 1;
            match classify(record) {
                StockStatus::OutOfStock => stats.out_of_stock += 1,
                StockStatus::LowStock => stats.low_stock += 1,
                StockStatus::InStock => {}
            }
            stats.total_value = stats.total_value.saturating_add(record.stock_value());
            stats
        })
}

/// Validates every record, then summarizes.
///
/// Fails on the first invalid record with [`InventoryError::InvalidBatch`],
/// naming its position; no partial stats are returned.
pub fn try_summarize(records: &[InventoryRecord]) -> Result<SummaryStats, InventoryError> {
    for (index, record) in records.iter().enumerate() {
        record
            .validate()
            .map_err(|source| InventoryError::InvalidBatch {
                index,
                source: Box::new(source),
            })?;
    }
    Ok(summarize(records))
}

/// Records that are low or out of stock, in input order.
pub fn alert_list(records: &[InventoryRecord]) -> Vec<&InventoryRecord> {
    records
        .iter()
        .filter(|record| classify(record).is_alert())
        .collect()
}

/// One row of the alerts panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockAlert {
    pub id: ItemId,
    pub name: String,
    pub sku: String,
    pub quantity: i64,
    pub status: StockStatus,
}

impl From<&InventoryRecord> for StockAlert {
    fn from(record: &InventoryRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            sku: record.sku.clone(),
            quantity: record.quantity,
            status: classify(record),
        }
    }
}

/// [`alert_list`] with each row's status attached.
pub fn stock_alerts(records: &[InventoryRecord]) -> Vec<StockAlert> {
    alert_list(records).into_iter().map(StockAlert::from).collect()
}
