//! Runtime configuration for the inventory system and its dashboards.

use serde::{Deserialize, Serialize};

use crate::inventory_actor::InventoryError;

/// Settings shared by [`InventorySystem`](crate::lifecycle::InventorySystem)
/// and every [`DashboardView`](crate::dashboard::DashboardView) it builds.
///
/// Every key is optional in a JSON document; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Capacity of the catalog actor's request channel.
    pub channel_capacity: usize,
    /// How many rows the "Recent Products" panel shows.
    pub recent_limit: usize,
    /// Prefix used when displaying money amounts.
    pub currency_symbol: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 32,
            recent_limit: 5,
            currency_symbol: "$".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(json: &str) -> Result<Self, InventoryError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| InventoryError::Fixture(e.to_string()))?;
        if config.channel_capacity == 0 {
            // tokio rejects zero-capacity channels
            return Err(InventoryError::Fixture(
                "channel_capacity must be at least 1".to_string(),
            ));
        }
        Ok(config)
    }
}
