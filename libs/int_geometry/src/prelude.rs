//! An import prelude that re-exports commonly used items.

pub use crate::bbox::Bbox;
pub use crate::cells::Cells;
pub use crate::contains::Contains;
pub use crate::intersect::Intersect;
pub use crate::point::Point;
pub use crate::rect::Rect;
pub use crate::size::Size;
pub use crate::translate::{Translate, TranslateMut};
pub use crate::union::BoundingUnion;
