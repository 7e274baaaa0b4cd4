//! int_geometry integration tests.

#[cfg(test)]
pub mod encoding;
#[cfg(test)]
pub mod properties;
#[cfg(test)]
pub mod scenarios;
pub mod shared;
