//! Geometry error types.

/// A result type returning [`enum@Error`] on failure.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced when building geometry from untrusted values.
///
/// Panicking constructors such as [`Size::new`](crate::size::Size::new) are the
/// normal entry points; this type backs their fallible counterparts and
/// deserialization.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A width was negative.
    #[error("width must be non-negative, got {0}")]
    NegativeWidth(i64),
    /// A height was negative.
    #[error("height must be non-negative, got {0}")]
    NegativeHeight(i64),
}
