//! Axis-aligned rectangular bounding boxes.

use impl_trait_for_tuples::impl_for_tuples;

use crate::rect::Rect;
use crate::union::BoundingUnion;

/// A geometric shape that has a bounding box.
///
/// # Examples
///
/// ```
/// # use int_geometry::prelude::*;
/// let rect = Rect::from_xywh(0, 0, 100, 200);
/// assert_eq!(rect.bbox(), Some(rect));
/// let point = Point::new(50, 70);
/// assert_eq!(point.bbox(), Some(Rect::from_xywh(50, 70, 0, 0)));
/// ```
pub trait Bbox {
    /// Computes the axis-aligned rectangular bounding box.
    ///
    /// If the shape has no extent at all, this method should return `None`.
    /// Points and zero-area rectangles still have a (zero-area) bounding box.
    fn bbox(&self) -> Option<Rect>;

    /// Computes the axis-aligned rectangular bounding box, panicking
    /// if there is none.
    #[track_caller]
    fn bbox_rect(&self) -> Rect {
        match self.bbox() {
            Some(rect) => rect,
            None => panic!("shape has no bounding box"),
        }
    }
}

impl<T> Bbox for &T
where
    T: Bbox,
{
    fn bbox(&self) -> Option<Rect> {
        T::bbox(*self)
    }
}

#[impl_for_tuples(64)]
impl Bbox for TupleIdentifier {
    #[allow(clippy::let_and_return)]
    fn bbox(&self) -> Option<Rect> {
        let mut bbox: Option<Rect> = None;
        for_tuples!( #( bbox = bbox.bounding_union(&TupleIdentifier.bbox()); )* );
        bbox
    }
}

impl<T: Bbox> Bbox for Vec<T> {
    fn bbox(&self) -> Option<Rect> {
        let mut bbox: Option<Rect> = None;
        for item in self {
            bbox = bbox.bounding_union(&item.bbox());
        }
        bbox
    }
}

impl Bbox for Option<Rect> {
    fn bbox(&self) -> Option<Rect> {
        *self
    }
}
