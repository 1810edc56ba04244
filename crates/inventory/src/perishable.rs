use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, ItemId, Money};

use crate::item::{InventoryItem, ItemDetails};

/// Fixed pattern accepted for expiry dates.
pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Freshness derived at report time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Freshness {
    Fresh,
    Expired,
}

impl core::fmt::Display for Freshness {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Freshness::Fresh => f.write_str("Fresh"),
            Freshness::Expired => f.write_str("EXPIRED"),
        }
    }
}

/// Parse an expiry date in `YYYY-MM-DD` form.
pub fn parse_expiry(input: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(input, EXPIRY_DATE_FORMAT)
        .map_err(|e| DomainError::date_format(input, e))
}

/// An item that stops being sellable once its expiry date is reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerishableItem {
    details: ItemDetails,
    expiry: NaiveDate,
}

impl PerishableItem {
    /// Build a perishable item from raw inputs.
    ///
    /// Fails with `DomainError::DateFormat` if `expiry` is not `YYYY-MM-DD`, and
    /// with `DomainError::Validation` if `unit_price` is negative or
    /// `unit_price × quantity` overflows.
    pub fn new(
        item_id: impl Into<ItemId>,
        name: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
        expiry: &str,
    ) -> DomainResult<Self> {
        let expiry = parse_expiry(expiry)?;
        let unit_price = Money::new(unit_price)?;
        Ok(Self::from_parts(
            ItemDetails::new(item_id, name, unit_price, quantity)?,
            expiry,
        ))
    }

    pub fn from_parts(details: ItemDetails, expiry: NaiveDate) -> Self {
        Self { details, expiry }
    }

    pub fn expiry(&self) -> NaiveDate {
        self.expiry
    }

    /// The instant the item expires: 00:00 UTC at the start of the expiry day.
    ///
    /// Anchored to UTC, not the host's local zone, so the result does not depend
    /// on where the report runs. East of UTC an item therefore stays `Fresh`
    /// until the local clock reaches the UTC offset on its expiry day.
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self.expiry.and_time(NaiveTime::MIN))
    }

    /// `Fresh` only while the expiry instant is strictly after `as_of`.
    pub fn status(&self, as_of: DateTime<Utc>) -> Freshness {
        if self.expires_at() > as_of {
            Freshness::Fresh
        } else {
            Freshness::Expired
        }
    }
}

impl InventoryItem for PerishableItem {
    fn details(&self) -> &ItemDetails {
        &self.details
    }

    fn kind(&self) -> &'static str {
        "Perishable"
    }

    fn produce_report(&self, as_of: DateTime<Utc>) -> String {
        format!(
            "[{}] {} | Status: {} | Value: {}",
            self.kind(),
            self.name(),
            self.status(as_of),
            self.total_value()
        )
    }
}
