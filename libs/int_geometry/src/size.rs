//! Non-negative horizontal and vertical dimensions with no specified location.

use serde::{Deserialize, Serialize};

use crate::coord;
use crate::error::{Error, Result};

/// A width and a height, both guaranteed to be non-negative.
///
/// The fields are private: every way of creating or changing a [`Size`]
/// re-checks that neither dimension is negative.
#[derive(
    Debug, Copy, Clone, Default, Hash, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord,
)]
#[serde(try_from = "RawSize")]
pub struct Size {
    /// The width dimension.
    width: i64,
    /// The height dimension.
    height: i64,
}

/// The unchecked wire form of a [`Size`].
#[derive(Deserialize)]
struct RawSize {
    width: i64,
    height: i64,
}

impl Size {
    /// Creates a new [`Size`] from a width and height.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// let size = Size::new(100, 200);
    /// assert_eq!(size.width(), 100);
    /// assert_eq!(size.height(), 200);
    /// ```
    ///
    /// # Panics
    ///
    /// This method panics if `width` or `height` is negative.
    ///
    /// If the dimensions come from untrusted input, consider using [`Size::try_new`] instead.
    #[track_caller]
    pub fn new(width: i64, height: i64) -> Self {
        assert!(
            width >= 0,
            "Size::new requires a non-negative width, got {}",
            width
        );
        assert!(
            height >= 0,
            "Size::new requires a non-negative height, got {}",
            height
        );
        Self { width, height }
    }

    /// Creates a new [`Size`], returning an error if either dimension is negative.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// use int_geometry::error::Error;
    ///
    /// assert_eq!(Size::try_new(3, 4), Ok(Size::new(3, 4)));
    /// assert_eq!(Size::try_new(-3, 4), Err(Error::NegativeWidth(-3)));
    /// assert_eq!(Size::try_new(3, -4), Err(Error::NegativeHeight(-4)));
    /// ```
    pub fn try_new(width: i64, height: i64) -> Result<Self> {
        if width < 0 {
            return Err(Error::NegativeWidth(width));
        }
        if height < 0 {
            return Err(Error::NegativeHeight(height));
        }
        Ok(Self { width, height })
    }

    /// Returns the size whose width and height are both zero.
    #[inline]
    pub const fn zero() -> Self {
        Self {
            width: 0,
            height: 0,
        }
    }

    /// Returns the width (i.e. the horizontal dimension).
    #[inline]
    pub const fn width(&self) -> i64 {
        self.width
    }

    /// Returns the height (i.e. the vertical dimension).
    #[inline]
    pub const fn height(&self) -> i64 {
        self.height
    }

    /// Sets the width.
    ///
    /// # Panics
    ///
    /// This method panics if `width` is negative.
    #[track_caller]
    pub fn set_width(&mut self, width: i64) {
        assert!(
            width >= 0,
            "Size::set_width requires a non-negative width, got {}",
            width
        );
        self.width = width;
    }

    /// Sets the height.
    ///
    /// # Panics
    ///
    /// This method panics if `height` is negative.
    #[track_caller]
    pub fn set_height(&mut self, height: i64) {
        assert!(
            height >= 0,
            "Size::set_height requires a non-negative height, got {}",
            height
        );
        self.height = height;
    }

    /// Returns true if the width or the height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// # use int_geometry::prelude::*;
    /// assert!(Size::new(0, 5).is_empty());
    /// assert!(Size::new(5, 0).is_empty());
    /// assert!(!Size::new(1, 1).is_empty());
    /// ```
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the area, `width * height`.
    #[inline]
    #[track_caller]
    pub fn area(&self) -> i64 {
        coord::mul(self.width, self.height)
    }
}

impl TryFrom<RawSize> for Size {
    type Error = Error;

    /// Validates a decoded size.
    ///
    /// Rejections are reported to the caller as an [`Error`] and also logged
    /// at debug level with the offending dimensions.
    fn try_from(value: RawSize) -> Result<Self> {
        match Size::try_new(value.width, value.height) {
            Ok(size) => Ok(size),
            Err(err) => {
                tracing::debug!(
                    width = value.width,
                    height = value.height,
                    "rejected size with a negative dimension"
                );
                Err(err)
            }
        }
    }
}

impl TryFrom<(i64, i64)> for Size {
    type Error = Error;

    /// Converts a `(width, height)` pair using [`Size::try_new`].
    fn try_from(value: (i64, i64)) -> Result<Self> {
        Size::try_new(value.0, value.1)
    }
}
