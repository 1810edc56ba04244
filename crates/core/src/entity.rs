//! Entity trait: things tracked by identity rather than by their attributes.
//!
//! Two inventory entries with the same identifier describe the same stock-keeping
//! unit even when their quantities or prices differ.

/// Identity-bearing domain object.
pub trait Entity {
    /// Identifier type (e.g. [`crate::ItemId`]).
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// True when both entities carry the same identifier, whatever their state.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
