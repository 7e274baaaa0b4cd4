//! Checked coordinate arithmetic.
//!
//! All coordinate math in the crate goes through these helpers so that
//! overflow panics in release builds too.

#[inline]
#[track_caller]
pub(crate) fn add(a: i64, b: i64) -> i64 {
    match a.checked_add(b) {
        Some(value) => value,
        None => panic!("coordinate overflow: {} + {}", a, b),
    }
}

#[inline]
#[track_caller]
pub(crate) fn sub(a: i64, b: i64) -> i64 {
    match a.checked_sub(b) {
        Some(value) => value,
        None => panic!("coordinate overflow: {} - {}", a, b),
    }
}

#[inline]
#[track_caller]
pub(crate) fn mul(a: i64, b: i64) -> i64 {
    match a.checked_mul(b) {
        Some(value) => value,
        None => panic!("coordinate overflow: {} * {}", a, b),
    }
}

/// Narrows a value computed in `i128` back to a coordinate.
#[inline]
#[track_caller]
pub(crate) fn narrow(value: i128) -> i64 {
    match i64::try_from(value) {
        Ok(value) => value,
        Err(_) => panic!("coordinate overflow: {} does not fit in i64", value),
    }
}
