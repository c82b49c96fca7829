use tracing::{error, info, instrument};

use crate::clients::InventoryClient;
use crate::dashboard::DashboardView;
use crate::inventory_actor::InventoryError;
use crate::lifecycle::DashboardConfig;
use crate::model::{ItemCreate, ItemId, Session};

/// The runtime orchestrator for the storefront inventory.
///
/// `InventorySystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the catalog actor
/// - **Wiring**: handing each dashboard its own client clone, session and config
///
/// # Example
///
/// ```ignore
/// let system = InventorySystem::new(DashboardConfig::default());
/// system.seed(sample_inventory()).await?;
///
/// let mut dashboard = system.dashboard(Session::anonymous());
/// let stats = dashboard.refresh().await?.stats;
///
/// drop(dashboard);
/// system.shutdown().await?;
/// ```
pub struct InventorySystem {
    /// Client for interacting with the inventory actor
    pub inventory_client: InventoryClient,

    config: DashboardConfig,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    /// Spawns the catalog actor and returns the running system.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: DashboardConfig) -> Self {
        let (inventory_actor, inventory_client) =
            crate::inventory_actor::new(config.channel_capacity.max(1));

        // no dependencies (Context = ())
        let handle = tokio::spawn(inventory_actor.run(()));

        Self {
            inventory_client,
            config,
            handle,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Loads items into the catalog, stopping at the first invalid one.
    #[instrument(skip(self, items))]
    pub async fn seed(&self, items: Vec<ItemCreate>) -> Result<Vec<ItemId>, InventoryError> {
        self.inventory_client.import(items).await
    }

    /// Builds a dashboard for `session` over this catalog.
    pub fn dashboard(&self, session: Session) -> DashboardView {
        DashboardView::new(self.inventory_client.clone(), session, self.config.clone())
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the actor's channel once every clone is gone,
    /// so drop all dashboards built from this system first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.inventory_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
