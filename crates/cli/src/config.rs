//! Environment-driven configuration for the demonstration binary.

use anyhow::Context;
use chrono::{DateTime, NaiveTime, TimeZone, Utc};

use stockroom_inventory::parse_expiry;

pub const LOCATION_ENV: &str = "STOCKROOM_LOCATION";
pub const AS_OF_ENV: &str = "STOCKROOM_AS_OF";
pub const DEFAULT_LOCATION: &str = "Kigali Free Zone";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    /// Warehouse label.
    pub location: String,
    /// Report instant; `None` means "now".
    pub as_of: Option<DateTime<Utc>>,
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (tests pass a closure instead of touching the process env).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let location = lookup(LOCATION_ENV)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| {
                tracing::info!("{LOCATION_ENV} not set; using {DEFAULT_LOCATION:?}");
                DEFAULT_LOCATION.to_string()
            });

        let as_of = match lookup(AS_OF_ENV) {
            Some(raw) => {
                let date = parse_expiry(raw.trim())
                    .with_context(|| format!("{AS_OF_ENV} must be YYYY-MM-DD"))?;
                Some(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
            }
            None => None,
        };

        Ok(Self { location, as_of })
    }

    pub fn as_of_or_now(&self) -> DateTime<Utc> {
        self.as_of.unwrap_or_else(Utc::now)
    }
}
