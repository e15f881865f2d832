//! Entity trait: identity that persists across state changes.

/// Marker + minimal interface for records with a stable identifier.
pub trait Entity {
    /// Strongly-typed identifier of the record.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the record's identifier.
    fn id(&self) -> &Self::Id;
}
