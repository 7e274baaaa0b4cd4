//! Translation of geometric objects.

use crate::point::Point;

/// A shape that can be translated by mutation.
pub trait TranslateMut {
    /// Translates the shape by a [`Point`] through mutation.
    fn translate_mut(&mut self, p: Point);
}

impl<T: TranslateMut> TranslateMut for Vec<T> {
    fn translate_mut(&mut self, p: Point) {
        for i in self.iter_mut() {
            i.translate_mut(p);
        }
    }
}

impl<T: TranslateMut> TranslateMut for Option<T> {
    fn translate_mut(&mut self, p: Point) {
        if let Some(inner) = self.as_mut() {
            inner.translate_mut(p);
        }
    }
}

/// A shape that can be translated, returning the moved shape.
///
/// Blanket-implemented for everything that implements [`TranslateMut`].
///
/// # Examples
///
/// ```
/// # use int_geometry::prelude::*;
/// let rects = vec![Rect::from_xywh(0, 0, 1, 1), Rect::from_xywh(3, 3, 2, 2)];
/// let moved = rects.translate(Point::new(10, -10));
/// assert_eq!(moved, vec![Rect::from_xywh(10, -10, 1, 1), Rect::from_xywh(13, -7, 2, 2)]);
/// ```
pub trait Translate: TranslateMut + Sized {
    /// Translates the shape by a [`Point`].
    ///
    /// Creates a new shape at a location equal to the translation of the original.
    fn translate(mut self, p: Point) -> Self {
        self.translate_mut(p);
        self
    }
}

impl<T: TranslateMut + Sized> Translate for T {}
