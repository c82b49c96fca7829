//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the catalog actor, plus the ambient setup the
//! binary needs.
//!
//! - [`InventorySystem`] spawns the inventory actor, seeds it and builds
//!   [`DashboardView`](crate::dashboard::DashboardView)s with an injected
//!   [`Session`](crate::model::Session).
//! - [`DashboardConfig`] carries channel capacity, panel sizes and the currency
//!   symbol, loadable from JSON.
//! - [`setup_tracing`] initializes structured logging.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - every dashboard holds a clone, so drop those too
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Actor logs its final state** - size and version
//! 4. **Await completion** - [`InventorySystem::shutdown`] joins the task
//!
//! ```rust
//! use storefront_inventory::lifecycle::{DashboardConfig, InventorySystem};
//! use storefront_inventory::model::{sample_inventory, Session};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = InventorySystem::new(DashboardConfig::default());
//!     system.seed(sample_inventory()).await?;
//!
//!     let mut dashboard = system.dashboard(Session::anonymous());
//!     let snapshot = dashboard.refresh().await?;
//!     assert_eq!(snapshot.stats.total_products, 5);
//!
//!     drop(dashboard);
//!     system.shutdown().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod inventory_system;
pub mod tracing;

pub use config::*;
pub use inventory_system::*;
pub use self::tracing::*;
