//! Integer-coordinate 2-D geometry: points, sizes, and axis-aligned rectangles.
//!
//! Rectangles are half-open on both axes: a [`Rect`](crate::rect::Rect) spans
//! `[min_x, max_x) × [min_y, max_y)`, and iterating it yields every integer
//! cell in that region.
//!
//! # Examples
//!
//! Intersect two [rectangles](crate::rect::Rect):
//!
//! ```
//! # use int_geometry::prelude::*;
//! let a = Rect::from_xywh(0, 0, 4, 3);
//! let b = Rect::from_xywh(2, 1, 4, 4);
//! assert_eq!(a.intersection(b), Some(Rect::from_xywh(2, 1, 2, 2)));
//! ```
//!
//! Visit every cell of a rectangle in row-major order:
//!
//! ```
//! # use int_geometry::prelude::*;
//! let rect = Rect::from_xywh(10, 20, 2, 2);
//! let cells: Vec<Point> = rect.cells().collect();
//! assert_eq!(
//!     cells,
//!     vec![
//!         Point::new(10, 20),
//!         Point::new(11, 20),
//!         Point::new(10, 21),
//!         Point::new(11, 21),
//!     ]
//! );
//! ```
//!
//! # Overflow
//!
//! Coordinate arithmetic is checked in every build profile. An operation whose
//! result does not fit in an `i64` panics rather than wrapping.
#![warn(missing_docs)]

pub mod bbox;
pub mod cells;
pub mod contains;
mod coord;
pub mod error;
pub mod intersect;
pub mod point;
pub mod prelude;
pub mod rect;
pub mod size;
pub mod translate;
pub mod union;
