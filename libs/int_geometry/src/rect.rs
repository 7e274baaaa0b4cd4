//! Axis-aligned rectangles.
//!
//! A [`Rect`] covers the half-open region `[min_x, max_x) × [min_y, max_y)`.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::contains::Contains;
use crate::coord;
use crate::intersect::Intersect;
use crate::point::Point;
use crate::size::Size;
use crate::translate::TranslateMut;

/// An axis-aligned rectangle, specified by its minimum corner and its size.
///
/// The rectangle can never have a negative width or height since [`Size`]
/// enforces that on its own; it may be empty, though.
#[derive(
    Debug, Copy, Clone, Default, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Rect {
    /// The corner with the smallest x and y coordinates.
    pub origin: Point,
    /// The width and height.
    pub size: Size,
}

impl Rect {
    /// Creates a rectangle with the given origin and size.
    #[inline]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Returns the rectangle whose origin and size are both zero.
    #[inline]
    pub const fn zero() -> Self {
        Self::new(Point::zero(), Size::zero())
    }

    /// Creates a rectangle with its origin at `(0, 0)` and the given size.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let rect = Rect::from_size(Size::new(100, 200));
    /// assert_eq!(rect.min_point(), Point::zero());
    /// assert_eq!(rect.max_point(), Point::new(100, 200));
    /// ```
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(Point::zero(), size)
    }

    /// Creates a rectangle from its origin coordinates and dimensions.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let rect = Rect::from_xywh(15, 20, 30, 40);
    /// assert_eq!(rect.min_x(), 15);
    /// assert_eq!(rect.min_y(), 20);
    /// assert_eq!(rect.max_x(), 45);
    /// assert_eq!(rect.max_y(), 60);
    /// ```
    ///
    /// # Panics
    ///
    /// This method panics if `width` or `height` is negative.
    #[inline]
    #[track_caller]
    pub fn from_xywh(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// Creates a rectangle with the two given opposite corners.
    ///
    /// The corners may be given in any order; they are sorted so that the
    /// origin is the corner with the smallest coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let rect = Rect::from_corners(Point::new(30, 5), Point::new(10, 25));
    /// assert_eq!(rect, Rect::from_xywh(10, 5, 20, 20));
    /// ```
    #[track_caller]
    pub fn from_corners(p1: Point, p2: Point) -> Self {
        let min_x = p1.x.min(p2.x);
        let min_y = p1.y.min(p2.y);
        let max_x = p1.x.max(p2.x);
        let max_y = p1.y.max(p2.y);
        Self::new(
            Point::new(min_x, min_y),
            Size::new(coord::sub(max_x, min_x), coord::sub(max_y, min_y)),
        )
    }

    /// Returns the smallest x-coordinate of the rectangle.
    #[inline]
    pub const fn min_x(&self) -> i64 {
        self.origin.x
    }

    /// Returns the smallest y-coordinate of the rectangle.
    #[inline]
    pub const fn min_y(&self) -> i64 {
        self.origin.y
    }

    /// Returns the largest x-coordinate of the rectangle.
    ///
    /// This edge is exclusive: no point with this x-coordinate lies in the rectangle.
    #[inline]
    #[track_caller]
    pub fn max_x(&self) -> i64 {
        coord::add(self.origin.x, self.size.width())
    }

    /// Returns the largest y-coordinate of the rectangle.
    ///
    /// This edge is exclusive: no point with this y-coordinate lies in the rectangle.
    #[inline]
    #[track_caller]
    pub fn max_y(&self) -> i64 {
        coord::add(self.origin.y, self.size.height())
    }

    /// Returns the corner with the smallest x and y coordinates.
    #[inline]
    pub const fn min_point(&self) -> Point {
        self.origin
    }

    /// Returns the corner with the largest x and y coordinates.
    #[inline]
    #[track_caller]
    pub fn max_point(&self) -> Point {
        Point::new(self.max_x(), self.max_y())
    }

    /// Returns the horizontal width of the rectangle.
    #[inline]
    pub const fn width(&self) -> i64 {
        self.size.width()
    }

    /// Returns the vertical height of the rectangle.
    #[inline]
    pub const fn height(&self) -> i64 {
        self.size.height()
    }

    /// Returns the area of the rectangle.
    #[inline]
    #[track_caller]
    pub fn area(&self) -> i64 {
        self.size.area()
    }

    /// Returns true if the rectangle has zero width or zero height.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Returns a rectangle of the same size with its origin moved by `(dx, dy)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let rect = Rect::from_xywh(0, 0, 10, 20);
    /// assert_eq!(rect.offset_by(5, -5), Rect::from_xywh(5, -5, 10, 20));
    /// ```
    #[inline]
    #[track_caller]
    pub fn offset_by(&self, dx: i64, dy: i64) -> Self {
        Self::new(self.origin.offset_by(dx, dy), self.size)
    }

    /// Returns a rectangle with the same center that is smaller or larger
    /// than this one.
    ///
    /// The origin moves by `(dx, dy)` and the size shrinks by `(2 * dx, 2 * dy)`.
    /// Positive values shrink the rectangle; negative values grow it.
    ///
    /// Returns [`None`] if the result would have a negative width or height.
    /// A result with zero width or height is valid.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let rect = Rect::from_xywh(0, 0, 2, 2);
    /// assert_eq!(rect.inset_by(1, 1), Some(Rect::from_xywh(1, 1, 0, 0)));
    /// assert_eq!(rect.inset_by(-1, 0), Some(Rect::from_xywh(-1, 0, 4, 2)));
    /// assert_eq!(rect.inset_by(2, 2), None);
    /// ```
    ///
    /// # Panics
    ///
    /// Growing the rectangle panics if the result does not fit in `i64` coordinates.
    #[track_caller]
    pub fn inset_by(&self, dx: i64, dy: i64) -> Option<Self> {
        let width = i128::from(self.width()) - 2 * i128::from(dx);
        let height = i128::from(self.height()) - 2 * i128::from(dy);
        if width < 0 || height < 0 {
            return None;
        }
        let size = Size::new(coord::narrow(width), coord::narrow(height));
        Some(Self::new(self.origin.offset_by(dx, dy), size))
    }

    /// Returns the smallest rectangle that contains both `self` and `other`.
    ///
    /// Empty rectangles take part in the union like any other: their
    /// position still stretches the result.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let r1 = Rect::from_xywh(0, 0, 100, 200);
    /// let r2 = Rect::from_xywh(-50, 20, 170, 140);
    /// assert_eq!(r1.union(r2), Rect::from_xywh(-50, 0, 170, 200));
    /// ```
    #[track_caller]
    pub fn union(self, other: Self) -> Self {
        Self::from_corners(
            Point::new(self.min_x().min(other.min_x()), self.min_y().min(other.min_y())),
            Point::new(self.max_x().max(other.max_x()), self.max_y().max(other.max_y())),
        )
    }

    /// Calculates the rectangular union of all rectangles provided.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let rects = vec![
    ///     Rect::from_xywh(10, 20, 20, 20),
    ///     Rect::from_xywh(-10, 25, 30, 10),
    ///     Rect::from_xywh(15, 20, 10, 40),
    /// ];
    /// assert_eq!(Rect::union_all(rects.into_iter()), Rect::from_xywh(-10, 20, 40, 40));
    /// ```
    ///
    /// # Panics
    ///
    /// This function panics if the provided iterator has no elements.
    /// If your iterator may be empty, consider using [`Rect::union_all_option`].
    #[track_caller]
    pub fn union_all<T>(rects: impl Iterator<Item = T>) -> Self
    where
        T: Into<Self>,
    {
        match Self::union_all_option(rects.map(|r| Some(r.into()))) {
            Some(rect) => rect,
            None => panic!("Rect::union_all requires at least one rectangle"),
        }
    }

    /// Calculates the rectangular union of all `Option<Rect>`s provided.
    ///
    /// All `None` elements in the iterator are ignored.
    /// If the iterator has no `Some(_)` elements, this function returns [`None`].
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let rects = vec![
    ///     Some(Rect::from_xywh(10, 20, 20, 20)),
    ///     None,
    ///     Some(Rect::from_xywh(15, 20, 10, 40)),
    /// ];
    /// assert_eq!(Rect::union_all_option(rects.into_iter()), Some(Rect::from_xywh(10, 20, 20, 40)));
    /// assert_eq!(Rect::union_all_option(std::iter::empty::<Option<Rect>>()), None);
    /// ```
    pub fn union_all_option<T>(rects: impl Iterator<Item = T>) -> Option<Self>
    where
        T: Into<Option<Self>>,
    {
        rects
            .filter_map(|r| r.into())
            .fold(None, |acc, r| match acc {
                Some(acc) => Some(acc.union(r)),
                None => Some(r),
            })
    }

    /// Computes the rectangular intersection of this `Rect` with another `Rect`.
    ///
    /// If the two rectangles merely touch along an edge or at a corner, the
    /// intersection is a zero-width and/or zero-height rectangle, which is
    /// returned as `Some(_)`. Use [`Rect::intersects`] to check for an
    /// intersection with positive area.
    ///
    /// Returns `None` if the rectangles neither overlap nor touch.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let r1 = Rect::from_xywh(0, 0, 4, 3);
    /// let r2 = Rect::from_xywh(2, 1, 4, 4);
    /// assert_eq!(r1.intersection(r2), Some(Rect::from_xywh(2, 1, 2, 2)));
    ///
    /// let r1 = Rect::from_xywh(0, 0, 2, 2);
    /// let r2 = Rect::from_xywh(2, 0, 2, 2);
    /// assert_eq!(r1.intersection(r2), Some(Rect::from_xywh(2, 0, 0, 2)));
    ///
    /// let r2 = Rect::from_xywh(3, 0, 2, 2);
    /// assert_eq!(r1.intersection(r2), None);
    /// ```
    #[track_caller]
    pub fn intersection(self, other: Self) -> Option<Self> {
        let min_x = self.min_x().max(other.min_x());
        let min_y = self.min_y().max(other.min_y());
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());

        if max_x < min_x || max_y < min_y {
            return None;
        }
        // Never wider than either input, so the differences fit.
        let size = Size::new(coord::sub(max_x, min_x), coord::sub(max_y, min_y));
        Some(Self::new(Point::new(min_x, min_y), size))
    }

    /// Returns true if the two rectangles share a region of positive area.
    ///
    /// Rectangles that only touch do not intersect.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let r1 = Rect::from_xywh(0, 0, 2, 2);
    /// assert!(r1.intersects(Rect::from_xywh(1, 1, 2, 2)));
    /// assert!(!r1.intersects(Rect::from_xywh(2, 0, 2, 2)));
    /// ```
    #[track_caller]
    pub fn intersects(self, other: Self) -> bool {
        self.intersection(other).is_some_and(|r| !r.is_empty())
    }
}

impl Bbox for Rect {
    fn bbox(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl Intersect<Rect> for Rect {
    type Output = Self;

    fn intersect(&self, other: &Rect) -> Option<Self::Output> {
        self.intersection(*other)
    }
}

impl TranslateMut for Rect {
    fn translate_mut(&mut self, p: Point) {
        self.origin.translate_mut(p);
    }
}

impl From<Size> for Rect {
    /// Converts the [`Size`] to a [`Rect`] as described in [`Rect::from_size`].
    #[inline]
    fn from(value: Size) -> Self {
        Self::from_size(value)
    }
}

impl Contains<Point> for Rect {
    /// Returns true if the point lies in `[min_x, max_x) × [min_y, max_y)`.
    ///
    /// The minimum edges are inclusive and the maximum edges are exclusive,
    /// so an empty rectangle contains no points.
    fn contains(&self, other: &Point) -> bool {
        self.min_x() <= other.x
            && self.min_y() <= other.y
            && other.x < self.max_x()
            && other.y < self.max_y()
    }
}

impl Contains<Rect> for Rect {
    /// Returns true if the union of the two rectangles is `self`.
    ///
    /// Empty rectangles are not special-cased: an empty `other` is contained
    /// exactly when its position does not stretch the union.
    fn contains(&self, other: &Rect) -> bool {
        self.union(*other) == *self
    }
}
