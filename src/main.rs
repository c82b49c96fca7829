use storefront_inventory::clients::ActorClient;
use storefront_inventory::dashboard::SummaryStats;
use storefront_inventory::lifecycle::{setup_tracing, DashboardConfig, InventorySystem};
use storefront_inventory::model::{sample_inventory, InventoryRecord, Session, UserProfile};
use tracing::{error, info, warn, Instrument};

fn load_config() -> Result<DashboardConfig, String> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path).map_err(|e| format!("{}: {}", path, e))?;
            DashboardConfig::from_json(&json).map_err(|e| e.to_string())
        }
        None => Ok(DashboardConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = load_config()?;
    info!(?config, "Starting storefront inventory");

    let system = InventorySystem::new(config);

    let span = tracing::info_span!("seed");
    let ids = async {
        info!("Loading sample inventory");
        system
            .seed(sample_inventory())
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let session = Session::signed_in(UserProfile {
        first_name: Some("Maya".to_string()),
        email: Some("maya@example.com".to_string()),
    });
    let mut dashboard = system.dashboard(session);
    let currency = system.config().currency_symbol.clone();

    let span = tracing::info_span!("dashboard");
    async {
        let snapshot = dashboard.refresh().await.map_err(|e| e.to_string())?;
        info!(stats = %stats_line(&snapshot.stats, &currency), "Stats ready");
        for alert in snapshot.alerts() {
            warn!(sku = %alert.sku, name = %alert.name, quantity = alert.quantity, status = %alert.status, "Stock alert");
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Restock every alerted item back above its threshold
    let span = tracing::info_span!("restock");
    async {
        for id in &ids {
            let Some(record) = system.inventory_client.get(*id).await.map_err(|e| e.to_string())? else {
                continue;
            };
            if !record.stock_status().is_alert() {
                continue;
            }
            let units = restock_units(&record);
            match system.inventory_client.restock(*id, units).await {
                Ok(quantity) => info!(%id, units, quantity, "Restocked"),
                Err(e) => error!(%id, error = %e, "Restock failed"),
            }
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("dashboard");
    async {
        let snapshot = dashboard.refresh().await.map_err(|e| e.to_string())?;
        info!(
            version = snapshot.version,
            alerts = snapshot.alerts().len(),
            total_value = %snapshot.display_total_value(&currency),
            "Dashboard after restock"
        );
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    info!(
        user = dashboard.session().display_name(),
        recomputes = dashboard.recompute_count(),
        "Signing out"
    );
    dashboard.session_mut().sign_out();
    drop(dashboard);

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}

fn stats_line(stats: &SummaryStats, currency: &str) -> String {
    format!(
        "{} products, {} low, {} out, {}",
        stats.total_products,
        stats.low_stock,
        stats.out_of_stock,
        stats.display_total_value(currency)
    )
}

/// Units that bring `record` up to twice its threshold; at least one.
fn restock_units(record: &InventoryRecord) -> u32 {
    let shortfall = record.min_stock.saturating_mul(2).saturating_sub(record.quantity);
    u32::try_from(shortfall.max(1)).unwrap_or(u32::MAX)
}
