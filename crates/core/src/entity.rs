//! Entity trait: identity + continuity across state changes.

/// Something with a stable identity.
///
/// Two entities with the same id are the same thing at different points in
/// time, e.g. a stock record before and after a stock movement.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
