use chrono::{DateTime, Utc};
use serde::Serialize;

use stockroom_core::{DomainResult, Entity, ItemId, Money};

/// Fields shared by every kind of inventory item.
///
/// Price and quantity are fixed at construction; there is no restock or sell
/// operation in this model. Construction guarantees `unit_price × quantity`
/// is representable, so `total_value` never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemDetails {
    item_id: ItemId,
    name: String,
    unit_price: Money,
    quantity: u32,
}

impl ItemDetails {
    pub fn new(
        item_id: impl Into<ItemId>,
        name: impl Into<String>,
        unit_price: Money,
        quantity: u32,
    ) -> DomainResult<Self> {
        unit_price.checked_times(quantity)?;
        Ok(Self {
            item_id: item_id.into(),
            name: name.into(),
            unit_price,
            quantity,
        })
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// `unit_price × quantity`, computed on demand.
    pub fn total_value(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

impl Entity for ItemDetails {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.item_id
    }
}

/// Capability set every item stored in a [`crate::Warehouse`] must provide.
///
/// Concrete kinds (perishable today, others later) embed an [`ItemDetails`] and
/// supply their own report line. A warehouse only accepts values implementing
/// this trait, so a non-conforming value cannot reach it at all.
pub trait InventoryItem: core::fmt::Debug + Send + Sync {
    /// Shared identifier/name/price/quantity record.
    fn details(&self) -> &ItemDetails;

    /// Short tag printed at the start of the report line (e.g. `Perishable`).
    fn kind(&self) -> &'static str;

    /// One report line describing this item as of `as_of`.
    fn produce_report(&self, as_of: DateTime<Utc>) -> String;

    fn item_id(&self) -> &ItemId {
        self.details().item_id()
    }

    fn name(&self) -> &str {
        self.details().name()
    }

    fn unit_price(&self) -> Money {
        self.details().unit_price()
    }

    fn quantity(&self) -> u32 {
        self.details().quantity()
    }

    fn total_value(&self) -> Money {
        self.details().total_value()
    }
}
