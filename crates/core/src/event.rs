//! Domain events: immutable facts emitted by domain operations (e.g. an item
//! landing in a warehouse). Consumers decide whether to print, log or forward them.

use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are immutable facts. The type name and schema version are stable so
/// they can be logged or serialized without knowing the concrete payload.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "inventory.warehouse.item_added").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred (business time).
    fn occurred_at(&self) -> DateTime<Utc>;
}
