//! # Storefront Inventory
//!
//! The inventory core of a storefront dashboard: stock-status classification,
//! summary statistics, the low-stock alerts list, and the catalog they are
//! computed from.
//!
//! ## Module Tour
//!
//! ### 1. The Rules ([`dashboard`])
//! Pure functions over a slice of records.
//! - [`classify`](dashboard::classify) maps a record to
//!   [`StockStatus`](dashboard::StockStatus): zero units is out of stock,
//!   anything up to and including `min_stock` is low.
//! - [`summarize`](dashboard::summarize) computes
//!   [`SummaryStats`](dashboard::SummaryStats) in one pass;
//!   [`try_summarize`](dashboard::try_summarize) validates first.
//! - [`alert_list`](dashboard::alert_list) keeps the low and out-of-stock rows in order.
//! - [`DashboardView`](dashboard::DashboardView) caches all of the above per
//!   catalog version.
//!
//! ### 2. The Data ([`model`])
//! [`InventoryRecord`](model::InventoryRecord) and its DTOs, the injected
//! [`Session`](model::Session), and the sample fixture.
//!
//! ### 3. The Engine ([`framework`])
//! A generic `ResourceActor<T>` that owns a collection, serializes writes and
//! hands out versioned snapshots. [`mock`](framework::mock) has the test doubles.
//!
//! ### 4. The Catalog ([`inventory_actor`], [`clients`])
//! The inventory actor and its typed [`InventoryClient`](clients::InventoryClient).
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! [`InventorySystem`](lifecycle::InventorySystem), configuration and tracing setup.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run -- dashboard.json
//! ```

pub mod clients;
pub mod dashboard;
pub mod framework;
pub mod inventory_actor;
pub mod lifecycle;
pub mod model;
