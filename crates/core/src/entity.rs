//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Authors, magazines and articles are entities: two articles with the same
/// title are still different articles.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
