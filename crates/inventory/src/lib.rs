//! Inventory domain module.
//!
//! Items, the perishable item kind and the warehouse that aggregates them,
//! implemented purely as deterministic domain logic: every time-dependent
//! operation takes the instant to evaluate against as a parameter.

pub mod item;
pub mod perishable;
pub mod report;
pub mod warehouse;

pub use item::{InventoryItem, ItemDetails};
pub use perishable::{EXPIRY_DATE_FORMAT, Freshness, PerishableItem, parse_expiry};
pub use report::InventoryReport;
pub use warehouse::{ItemAdded, Warehouse, WarehouseEvent};
