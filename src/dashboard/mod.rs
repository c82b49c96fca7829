//! Dashboard logic: stock classification, summary statistics and the
//! memoized view that ties them to the catalog.
//!
//! [`status`] and [`summary`] are pure and synchronous; they work on any slice
//! of records, catalog-backed or not. [`view`] adds the catalog round-trips.

pub mod status;
pub mod summary;
pub mod view;

pub use status::{classify, Severity, StockStatus};
pub use summary::{
    alert_list, format_currency, stock_alerts, summarize, try_summarize, StockAlert, SummaryStats,
};
pub use view::{DashboardSnapshot, DashboardView};
