//! Identity shared by vehicles, handsets and books.

/// Something that stays the same object while its levels change.
///
/// Two entities with equal ids are the same instance at different points in
/// time, even if their fuel, battery or page counts differ.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    fn id(&self) -> &Self::Id;
}
