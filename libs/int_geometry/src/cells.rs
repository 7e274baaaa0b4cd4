//! Iteration over the integer cells of a rectangle.
//!
//! A rectangle of width `w` and height `h` has `w * h` cells, numbered in
//! row-major order: index `i` is the point `(min_x + i % w, min_y + i / w)`.
//! Indexed access and iteration both go through the same mapping.
//!
//! Any valid rectangle can be iterated, even one with more cells than a
//! `usize` can count. Only the operations that report an index or a count
//! as a `usize` panic when it does not fit.

use std::iter::FusedIterator;

use crate::contains::Contains;
use crate::coord;
use crate::point::Point;
use crate::rect::Rect;

impl Rect {
    /// Number of cells, exact for every rectangle since `width * height < 2^126`.
    fn cell_total(&self) -> u128 {
        self.width() as u128 * self.height() as u128
    }

    /// The single row-major mapping from index to cell.
    ///
    /// The caller must ensure `index < self.cell_total()`, which also makes
    /// the width positive.
    #[track_caller]
    fn cell(&self, index: u128) -> Point {
        let width = self.width() as u128;
        // Both quotients are below `i64::MAX`: `col < width`, `row < height`.
        let col = (index % width) as i64;
        let row = (index / width) as i64;
        Point::new(coord::add(self.min_x(), col), coord::add(self.min_y(), row))
    }

    /// Returns the number of integer cells in the rectangle, `width * height`.
    ///
    /// # Panics
    ///
    /// Panics if the count does not fit in a `usize`.
    #[track_caller]
    pub fn cell_count(&self) -> usize {
        let total = self.cell_total();
        match usize::try_from(total) {
            Ok(count) => count,
            Err(_) => panic!("cell count {} does not fit in usize", total),
        }
    }

    /// Returns the cell at position `index` in row-major order.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let rect = Rect::from_xywh(10, 20, 3, 2);
    /// assert_eq!(rect.point_at(0), Point::new(10, 20));
    /// assert_eq!(rect.point_at(2), Point::new(12, 20));
    /// assert_eq!(rect.point_at(3), Point::new(10, 21));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below `width * height`.
    #[track_caller]
    pub fn point_at(&self, index: usize) -> Point {
        let total = self.cell_total();
        assert!(
            (index as u128) < total,
            "index {} out of range for rectangle with {} cells",
            index,
            total
        );
        self.cell(index as u128)
    }

    /// Returns the cell at position `index`, or [`None`] if `index` is out of range.
    pub fn get(&self, index: usize) -> Option<Point> {
        ((index as u128) < self.cell_total()).then(|| self.cell(index as u128))
    }

    /// Returns the row-major index of `point`, or [`None`] if the point
    /// does not lie in the rectangle.
    ///
    /// This is the inverse of [`Rect::point_at`].
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let rect = Rect::from_xywh(10, 20, 3, 2);
    /// assert_eq!(rect.index_of(Point::new(11, 21)), Some(4));
    /// assert_eq!(rect.index_of(Point::new(13, 21)), None);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the point lies in the rectangle but its index does not fit in a `usize`.
    #[track_caller]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains(&point) {
            return None;
        }
        // Containment keeps both offsets in `[0, i64::MAX)`.
        let col = coord::sub(point.x, self.min_x()) as u128;
        let row = coord::sub(point.y, self.min_y()) as u128;
        let index = row * self.width() as u128 + col;
        match usize::try_from(index) {
            Ok(index) => Some(index),
            Err(_) => panic!("cell index {} does not fit in usize", index),
        }
    }

    /// Returns a lazy iterator over every cell of the rectangle in row-major order.
    ///
    /// Calling this again starts a fresh pass over the same cells.
    #[inline]
    pub fn cells(&self) -> Cells {
        Cells::new(*self)
    }
}

/// An iterator over the cells of a [`Rect`], produced by [`Rect::cells`].
#[derive(Debug, Clone)]
pub struct Cells {
    rect: Rect,
    front: u128,
    back: u128,
}

impl Cells {
    fn new(rect: Rect) -> Self {
        Self {
            rect,
            front: 0,
            back: rect.cell_total(),
        }
    }

    /// The rectangle being iterated.
    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Iterator for Cells {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.front >= self.back {
            return None;
        }
        let point = self.rect.cell(self.front);
        self.front += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.back - self.front) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Point> {
        self.front = self.front.saturating_add(n as u128).min(self.back);
        self.next()
    }

    #[track_caller]
    fn count(self) -> usize {
        let remaining = self.back - self.front;
        match usize::try_from(remaining) {
            Ok(count) => count,
            Err(_) => panic!("cell count {} does not fit in usize", remaining),
        }
    }

    fn last(mut self) -> Option<Point> {
        self.next_back()
    }
}

impl DoubleEndedIterator for Cells {
    fn next_back(&mut self) -> Option<Point> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.rect.cell(self.back))
    }

    fn nth_back(&mut self, n: usize) -> Option<Point> {
        self.back = self.back.saturating_sub(n as u128).max(self.front);
        self.next_back()
    }
}

impl FusedIterator for Cells {}

impl IntoIterator for Rect {
    type Item = Point;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.cells()
    }
}

impl IntoIterator for &Rect {
    type Item = Point;
    type IntoIter = Cells;

    fn into_iter(self) -> Cells {
        self.cells()
    }
}
