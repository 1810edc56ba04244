use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainResult, Event, ItemId, Money};

use crate::item::InventoryItem;
use crate::report::InventoryReport;

/// Event: ItemAdded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAdded {
    pub location: String,
    pub item_id: ItemId,
    pub name: String,
    pub occurred_at: DateTime<Utc>,
}

impl core::fmt::Display for ItemAdded {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Added {} to {} warehouse.", self.name, self.location)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarehouseEvent {
    ItemAdded(ItemAdded),
}

impl Event for WarehouseEvent {
    fn event_type(&self) -> &'static str {
        match self {
            WarehouseEvent::ItemAdded(_) => "inventory.warehouse.item_added",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            WarehouseEvent::ItemAdded(e) => e.occurred_at,
        }
    }
}

impl core::fmt::Display for WarehouseEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            WarehouseEvent::ItemAdded(e) => core::fmt::Display::fmt(e, f),
        }
    }
}

/// Items stored at one physical location.
///
/// The warehouse owns its items exclusively and keeps them in insertion order.
/// Items can be appended but never removed; duplicates are kept as-is.
#[derive(Debug)]
pub struct Warehouse {
    location: String,
    items: Vec<Box<dyn InventoryItem>>,
}

impl Warehouse {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            items: Vec::new(),
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Stored items, in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &dyn InventoryItem> + '_ {
        self.items.iter().map(|item| &**item)
    }

    /// Append an item, stamping the resulting event with the wall clock.
    pub fn add_item<I: InventoryItem + 'static>(&mut self, item: I) -> WarehouseEvent {
        self.add_item_at(item, Utc::now())
    }

    pub fn add_item_at<I: InventoryItem + 'static>(
        &mut self,
        item: I,
        occurred_at: DateTime<Utc>,
    ) -> WarehouseEvent {
        self.add_boxed_at(Box::new(item), occurred_at)
    }

    /// Append an already type-erased item (e.g. one built from a heterogeneous list).
    pub fn add_boxed_at(
        &mut self,
        item: Box<dyn InventoryItem>,
        occurred_at: DateTime<Utc>,
    ) -> WarehouseEvent {
        let added = ItemAdded {
            location: self.location.clone(),
            item_id: item.item_id().clone(),
            name: item.name().to_string(),
            occurred_at,
        };

        tracing::info!(
            location = %self.location,
            item_id = %added.item_id,
            kind = item.kind(),
            "{added}"
        );

        self.items.push(item);
        WarehouseEvent::ItemAdded(added)
    }

    /// Sum of every stored item's total value; fails if the sum overflows.
    pub fn total_value(&self) -> DomainResult<Money> {
        self.items
            .iter()
            .try_fold(Money::ZERO, |acc, item| acc.checked_add(item.total_value()))
    }

    /// Ask each item, in insertion order, to describe itself as of `as_of`.
    pub fn generate_full_report(&self, as_of: DateTime<Utc>) -> InventoryReport {
        let lines: Vec<String> = self
            .items
            .iter()
            .map(|item| item.produce_report(as_of))
            .collect();

        tracing::debug!(
            location = %self.location,
            items = lines.len(),
            as_of = %as_of,
            "generated inventory report"
        );

        InventoryReport::new(self.location.clone(), as_of, lines)
    }

    pub fn generate_full_report_now(&self) -> InventoryReport {
        self.generate_full_report(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemDetails;
    use crate::perishable::PerishableItem;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    /// Non-perishable stock, to show the warehouse takes any item kind.
    #[derive(Debug)]
    struct DryGoods {
        details: ItemDetails,
    }

    impl InventoryItem for DryGoods {
        fn details(&self) -> &ItemDetails {
            &self.details
        }

        fn kind(&self) -> &'static str {
            "Dry"
        }

        fn produce_report(&self, _as_of: DateTime<Utc>) -> String {
            format!("[{}] {} | Value: {}", self.kind(), self.name(), self.total_value())
        }
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn milk() -> PerishableItem {
        PerishableItem::new("M001", "Inyange Milk", Decimal::new(12, 1), 500, "2025-12-30").unwrap()
    }

    fn bread() -> PerishableItem {
        PerishableItem::new("B022", "Local Bread", Decimal::new(5, 1), 20, "2023-01-01").unwrap()
    }

    fn kigali() -> Warehouse {
        let mut hub = Warehouse::new("Kigali Free Zone");
        hub.add_item_at(milk(), at(2024, 6, 1));
        hub.add_item_at(bread(), at(2024, 6, 1));
        hub
    }

    #[test]
    fn new_warehouse_is_empty() {
        let hub = Warehouse::new("Kigali Free Zone");
        assert!(hub.is_empty());
        assert_eq!(hub.location(), "Kigali Free Zone");
        assert_eq!(hub.total_value().unwrap(), Money::ZERO);
        assert!(hub.generate_full_report(at(2024, 6, 1)).is_empty());
    }

    #[test]
    fn add_item_emits_notification() {
        let mut hub = Warehouse::new("Kigali Free Zone");
        let event = hub.add_item_at(milk(), at(2024, 6, 1));

        assert_eq!(hub.len(), 1);
        assert_eq!(event.to_string(), "Added Inyange Milk to Kigali Free Zone warehouse.");
        assert_eq!(event.event_type(), "inventory.warehouse.item_added");
        assert_eq!(event.version(), 1);
        assert_eq!(event.occurred_at(), at(2024, 6, 1));
        match &event {
            WarehouseEvent::ItemAdded(e) => {
                assert_eq!(e.item_id.as_str(), "M001");
                assert_eq!(e.location, "Kigali Free Zone");
            }
        }
    }

    #[test]
    fn add_item_stamps_wall_clock() {
        let mut hub = Warehouse::new("Kigali Free Zone");
        let before = Utc::now();
        let event = hub.add_item(bread());
        let after = Utc::now();

        assert_eq!(hub.len(), 1);
        assert_eq!(event.to_string(), "Added Local Bread to Kigali Free Zone warehouse.");
        assert!(event.occurred_at() >= before && event.occurred_at() <= after);
        assert_eq!(hub.items().next().map(|i| i.item_id().as_str()), Some("B022"));
    }

    #[test]
    fn report_now_uses_wall_clock() {
        let mut hub = Warehouse::new("Kigali Free Zone");
        hub.add_item(bread());

        let before = Utc::now();
        let report = hub.generate_full_report_now();

        assert!(report.generated_at() >= before);
        assert_eq!(
            report.lines(),
            ["[Perishable] Local Bread | Status: EXPIRED | Value: $10.00"]
        );
    }

    #[test]
    fn total_value_overflow_is_an_error() {
        let mut hub = Warehouse::new("Kigali Free Zone");
        for id in ["Z1", "Z2"] {
            let item = PerishableItem::new(id, "Bulk", Decimal::MAX, 1, "2025-12-30").unwrap();
            hub.add_item_at(item, at(2024, 6, 1));
        }
        assert!(matches!(
            hub.total_value(),
            Err(stockroom_core::DomainError::Validation(_))
        ));
    }

    #[test]
    fn event_payload_serializes() {
        let mut hub = Warehouse::new("Kigali Free Zone");
        let event = hub.add_item_at(bread(), at(2024, 6, 1));
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["ItemAdded"]["item_id"], "B022");
        assert_eq!(json["ItemAdded"]["name"], "Local Bread");
    }

    #[test]
    fn report_matches_console_format() {
        let report = kigali().generate_full_report(at(2024, 6, 1));
        assert_eq!(
            report.lines(),
            [
                "[Perishable] Inyange Milk | Status: Fresh | Value: $600.00",
                "[Perishable] Local Bread | Status: EXPIRED | Value: $10.00",
            ]
        );
        assert_eq!(
            report.to_string(),
            "\n--- Inventory Report: Kigali Free Zone ---\n\
             [Perishable] Inyange Milk | Status: Fresh | Value: $600.00\n\
             [Perishable] Local Bread | Status: EXPIRED | Value: $10.00\n"
        );
        assert_eq!(report.generated_at(), at(2024, 6, 1));
    }

    #[test]
    fn report_status_is_computed_per_call() {
        let hub = kigali();
        let early = hub.generate_full_report(at(2024, 1, 1));
        let late = hub.generate_full_report(at(2026, 1, 1));
        assert!(early.lines()[0].contains("Status: Fresh"));
        assert!(late.lines()[0].contains("Status: EXPIRED"));
    }

    #[test]
    fn duplicates_are_kept() {
        let mut hub = Warehouse::new("Kigali Free Zone");
        hub.add_item_at(milk(), at(2024, 6, 1));
        hub.add_item_at(milk(), at(2024, 6, 1));
        assert_eq!(hub.len(), 2);
        assert_eq!(hub.total_value().unwrap().amount(), Decimal::new(1200, 0));
    }

    #[test]
    fn mixed_item_kinds_share_one_warehouse() {
        let mut hub = kigali();
        hub.add_item_at(
            DryGoods {
                details: ItemDetails::new("R010", "Rice", Money::parse("1250.5").unwrap(), 4)
                    .unwrap(),
            },
            at(2024, 6, 1),
        );

        let report = hub.generate_full_report(at(2024, 6, 1));
        assert_eq!(report.len(), 3);
        assert_eq!(report.lines()[2], "[Dry] Rice | Value: $5,002.00");
        assert_eq!(hub.total_value().unwrap().amount(), Decimal::new(5612, 0));

        let kinds: Vec<&str> = hub.items().map(|i| i.kind()).collect();
        assert_eq!(kinds, ["Perishable", "Perishable", "Dry"]);
    }

    #[test]
    fn boxed_items_can_be_added() {
        let mut hub = Warehouse::new("Musanze Depot");
        let stock: Vec<Box<dyn InventoryItem>> = vec![Box::new(bread()), Box::new(milk())];
        for item in stock {
            hub.add_boxed_at(item, at(2024, 6, 1));
        }
        let ids: Vec<&str> = hub.items().map(|i| i.item_id().as_str()).collect();
        assert_eq!(ids, ["B022", "M001"]);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            ..ProptestConfig::default()
        })]

        /// Property: N adds produce N report lines, in insertion order.
        #[test]
        fn report_preserves_insertion_order(
            quantities in prop::collection::vec(0u32..10_000u32, 0..30)
        ) {
            let mut hub = Warehouse::new("Kigali Free Zone");
            for (i, quantity) in quantities.iter().enumerate() {
                let before = hub.len();
                let item = PerishableItem::new(
                    format!("P{i:03}"),
                    format!("Item {i}"),
                    Decimal::new(125, 2),
                    *quantity,
                    "2025-12-30",
                ).unwrap();
                hub.add_item_at(item, at(2024, 6, 1));
                prop_assert_eq!(hub.len(), before + 1);
            }

            let report = hub.generate_full_report(at(2024, 6, 1));
            prop_assert_eq!(report.len(), quantities.len());
            for (i, line) in report.lines().iter().enumerate() {
                let prefix = format!("[Perishable] Item {i} | Status: Fresh | Value: $");
                prop_assert!(line.starts_with(&prefix));
            }
        }
    }
}
