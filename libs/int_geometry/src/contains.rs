//! Traits for checking whether a shape contains another shape.

/// Provides information on whether a shape contains another shape.
pub trait Contains<T: ?Sized> {
    /// Returns true if `other` lies entirely within this shape.
    fn contains(&self, other: &T) -> bool;
}
