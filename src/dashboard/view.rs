//! Memoized dashboard over the inventory catalog.
//!
//! A [`DashboardView`] holds its collaborators explicitly: a catalog client, the
//! signed-in [`Session`] and a [`DashboardConfig`]. Derived figures are cached
//! together with the catalog version they were computed from, and
//! [`DashboardView::refresh`] only recomputes when that version moves.

use tracing::{debug, info, instrument};

use crate::clients::InventoryClient;
use crate::dashboard::summary::{format_currency, stock_alerts, summarize, StockAlert, SummaryStats};
use crate::framework::ActorClient;
use crate::inventory_actor::InventoryError;
use crate::lifecycle::DashboardConfig;
use crate::model::{InventoryRecord, Session};

/// Everything the dashboard shows, computed from one catalog version.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub version: u64,
    /// Records in the order they were added to the catalog.
    pub records: Vec<InventoryRecord>,
    pub stats: SummaryStats,
}

impl DashboardSnapshot {
    /// Low and out-of-stock rows, in catalog order.
    pub fn alerts(&self) -> Vec<StockAlert> {
        stock_alerts(&self.records)
    }

    /// The first `limit` records, for the "Recent Products" panel.
    pub fn recent(&self, limit: usize) -> &[InventoryRecord] {
        &self.records[..limit.min(self.records.len())]
    }

    pub fn display_total_value(&self, currency_symbol: &str) -> String {
        self.stats.display_total_value(currency_symbol)
    }
}

/// A user's dashboard over the catalog.
pub struct DashboardView {
    client: InventoryClient,
    session: Session,
    config: DashboardConfig,
    cache: Option<DashboardSnapshot>,
    recomputes: u64,
}

impl DashboardView {
    pub fn new(client: InventoryClient, session: Session, config: DashboardConfig) -> Self {
        Self {
            client,
            session,
            config,
            cache: None,
            recomputes: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access to the session, e.g. to sign the user out.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// The last computed snapshot, without asking the catalog.
    pub fn cached(&self) -> Option<&DashboardSnapshot> {
        self.cache.as_ref()
    }

    /// How many times the stats have been recomputed.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Brings the dashboard up to date with the catalog.
    ///
    /// Costs one version round-trip when nothing changed. Otherwise fetches a
    /// snapshot and recomputes the stats. On error the previous snapshot is kept.
    #[instrument(skip(self), fields(user = %self.session.display_name()))]
    pub async fn refresh(&mut self) -> Result<&DashboardSnapshot, InventoryError> {
        let version = self.client.version().await?;

        let current = match self.cache.take() {
            Some(cached) if cached.version == version => {
                debug!(version, "Dashboard cache hit");
                cached
            }
            stale => match self.recompute().await {
                Ok(fresh) => fresh,
                Err(e) => {
                    self.cache = stale;
                    return Err(e);
                }
            },
        };

        let current: &DashboardSnapshot = self.cache.insert(current);
        Ok(current)
    }

    async fn recompute(&mut self) -> Result<DashboardSnapshot, InventoryError> {
        let snapshot = self.client.snapshot().await?;
        let stats = summarize(&snapshot.items);
        self.recomputes += 1;
        info!(
            version = snapshot.version,
            total_products = stats.total_products,
            low_stock = stats.low_stock,
            out_of_stock = stats.out_of_stock,
            total_value = %format_currency(stats.total_value, &self.config.currency_symbol),
            "Dashboard recomputed"
        );
        Ok(DashboardSnapshot {
            version: snapshot.version,
            records: snapshot.items,
            stats,
        })
    }

    /// Refreshes and returns the recent-products rows, sized by the config.
    pub async fn recent_products(&mut self) -> Result<Vec<InventoryRecord>, InventoryError> {
        let limit = self.config.recent_limit;
        Ok(self.refresh().await?.recent(limit).to_vec())
    }

    /// Refreshes and returns the total value formatted with the configured currency.
    pub async fn total_value_display(&mut self) -> Result<String, InventoryError> {
        let symbol = self.config.currency_symbol.clone();
        Ok(self.refresh().await?.display_total_value(&symbol))
    }
}
