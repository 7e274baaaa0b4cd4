//! 2-D integer points.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::coord;
use crate::rect::Rect;
use crate::size::Size;
use crate::translate::TranslateMut;

/// A point in two-dimensional integer space.
#[derive(
    Debug, Copy, Clone, Default, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: i64,
    /// The y-coordinate of the point.
    pub y: i64,
}

impl Point {
    /// Creates a new [`Point`] from (x,y) coordinates.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Returns the origin, `(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let origin = Point::zero();
    /// assert_eq!(origin, Point::new(0, 0));
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Returns a point offset from this one by `dx` along the x-axis
    /// and `dy` along the y-axis.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let p = Point::new(3, 4);
    /// assert_eq!(p.offset_by(-5, 10), Point::new(-2, 14));
    /// ```
    #[inline]
    #[track_caller]
    pub fn offset_by(&self, dx: i64, dy: i64) -> Self {
        Self::new(coord::add(self.x, dx), coord::add(self.y, dy))
    }
}

impl TranslateMut for Point {
    fn translate_mut(&mut self, p: Point) {
        *self = self.offset_by(p.x, p.y);
    }
}

impl Bbox for Point {
    /// A point is bounded by the zero-area rectangle located at the point.
    fn bbox(&self) -> Option<Rect> {
        Some(Rect::new(*self, Size::zero()))
    }
}

impl std::ops::Add<Point> for Point {
    type Output = Self;
    fn add(self, rhs: Point) -> Self::Output {
        self.offset_by(rhs.x, rhs.y)
    }
}

impl std::ops::Add<Size> for Point {
    type Output = Self;
    fn add(self, rhs: Size) -> Self::Output {
        self.offset_by(rhs.width(), rhs.height())
    }
}

impl std::ops::AddAssign<Point> for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub<Point> for Point {
    type Output = Self;
    fn sub(self, rhs: Point) -> Self::Output {
        Self::new(coord::sub(self.x, rhs.x), coord::sub(self.y, rhs.y))
    }
}

impl std::ops::SubAssign<Point> for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}

impl From<(i64, i64)> for Point {
    fn from(value: (i64, i64)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}
