//! Unions of geometric objects.

use crate::rect::Rect;

/// Trait for calculating the smallest rectangle enclosing two shapes.
///
/// Implemented for combinations of [`Rect`] and `Option<Rect>`, where
/// [`None`] stands for "nothing" and is absorbed by the other side.
///
/// # Examples
///
/// ```
/// # use int_geometry::prelude::*;
/// let r1 = Rect::from_xywh(0, 0, 2, 2);
/// let r2 = Rect::from_xywh(5, 5, 1, 1);
/// assert_eq!(r1.bounding_union(&r2), Rect::from_xywh(0, 0, 6, 6));
/// assert_eq!(None::<Rect>.bounding_union(&Some(r2)), Some(r2));
/// assert_eq!(None::<Rect>.bounding_union(&None::<Rect>), None);
/// ```
pub trait BoundingUnion<T: ?Sized> {
    /// The type of the enclosing shape.
    type Output;
    /// Calculates the bounding union of this shape with `other`.
    fn bounding_union(&self, other: &T) -> Self::Output;
}

impl BoundingUnion<Rect> for Rect {
    type Output = Rect;
    fn bounding_union(&self, other: &Rect) -> Self::Output {
        self.union(*other)
    }
}

impl BoundingUnion<Option<Rect>> for Rect {
    type Output = Rect;
    fn bounding_union(&self, other: &Option<Rect>) -> Self::Output {
        match other {
            Some(other) => self.union(*other),
            None => *self,
        }
    }
}

impl BoundingUnion<Rect> for Option<Rect> {
    type Output = Rect;
    fn bounding_union(&self, other: &Rect) -> Self::Output {
        other.bounding_union(self)
    }
}

impl BoundingUnion<Option<Rect>> for Option<Rect> {
    type Output = Option<Rect>;
    fn bounding_union(&self, other: &Option<Rect>) -> Self::Output {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.union(*b)),
            (Some(r), None) | (None, Some(r)) => Some(*r),
            (None, None) => None,
        }
    }
}
