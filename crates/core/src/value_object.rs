//! Value object trait: equality by value, not identity.
//!
//! A value object has no identity of its own. `Money` of `$1.20` is
//! interchangeable with any other `$1.20`; to "change" one, build a new one.

/// Marker trait for value objects.
///
/// Implementors are immutable once constructed, cheap to clone and compared by
/// their attribute values.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
