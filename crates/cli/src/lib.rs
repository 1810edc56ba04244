//! `stockroom` demonstration wiring.
//!
//! Builds a warehouse, stocks it and renders its report. All environment
//! lookups happen in [`config`] so the run itself stays deterministic.

pub mod config;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use stockroom_core::DomainResult;
use stockroom_inventory::{InventoryReport, PerishableItem, Warehouse, WarehouseEvent};

pub use config::DemoConfig;

/// Output of one demonstration run.
#[derive(Debug)]
pub struct DemoRun {
    pub notifications: Vec<WarehouseEvent>,
    pub report: InventoryReport,
}

/// Stock the sample items and generate the report as of `as_of`.
pub fn run(location: &str, as_of: DateTime<Utc>) -> DomainResult<DemoRun> {
    let mut hub = Warehouse::new(location);

    let milk = PerishableItem::new("M001", "Inyange Milk", Decimal::new(12, 1), 500, "2025-12-30")?;
    let old_bread = PerishableItem::new("B022", "Local Bread", Decimal::new(5, 1), 20, "2023-01-01")?;

    let notifications = vec![hub.add_item_at(milk, as_of), hub.add_item_at(old_bread, as_of)];
    let report = hub.generate_full_report(as_of);
    let total_value = hub.total_value()?;

    tracing::info!(
        location = %hub.location(),
        items = hub.len(),
        total_value = %total_value,
        "inventory stocked"
    );

    Ok(DemoRun {
        notifications,
        report,
    })
}
