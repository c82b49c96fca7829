//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber for the whole system.
//!
//! The compact format hides the module prefix (`with_target(false)`); the
//! actor identifies itself with an `entity_type` field instead. Verbosity comes
//! from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and write events
//! RUST_LOG=debug cargo run    # full payloads, reads and cache hits
//! ```
//!
//! With `RUST_LOG=info` a seeded dashboard looks like:
//!
//! ```text
//! INFO Actor started entity_type="InventoryRecord"
//! INFO Created entity_type="InventoryRecord" id=item_1 size=1 version=1
//! INFO seed:import: Import complete imported=5 count=5
//! INFO dashboard:refresh: Dashboard recomputed version=5 total_products=5 low_stock=1 out_of_stock=1
//! ```
use tracing_subscriber::EnvFilter;

/// Initializes logging. Falls back to `info` when `RUST_LOG` is unset or invalid.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type replaces module paths
        .compact()
        .try_init();
}
