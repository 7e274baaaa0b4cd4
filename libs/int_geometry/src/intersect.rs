//! Intersections of geometric objects.

/// Trait for calculating the intersection with another geometric object.
pub trait Intersect<T: ?Sized> {
    /// The type of the output shape representing the intersection.
    type Output;
    /// Calculates the intersection of this shape with `other`.
    ///
    /// Returns [`None`] if the two shapes neither overlap nor touch.
    fn intersect(&self, other: &T) -> Option<Self::Output>;
}
