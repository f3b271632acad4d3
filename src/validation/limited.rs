//! General-purpose range checking
//!
//! The checker normalizes its bounds on every call, tests membership,
//! and hands the value back unchanged on success so callers can use
//! the return value in place of the input.

use alloc::format;

use crate::{Interval, RangeElement, RangeforceError, Result};

/// Check that a value lies within an interval
///
/// Each side of the interval is either a concrete, inclusive extreme
/// or `None` for an open side; at least one side must be concrete.
/// Returns the value unchanged when it is in range. Fails with a
/// `Configuration` error when the interval itself is invalid and with
/// an `OutOfRange` error when the value misses it. Diagnostics use the
/// generic label `Value`; see [`limited_named`] to supply one.
pub fn limited<T: RangeElement>(value: T, lower: Option<T>, upper: Option<T>) -> Result<T> {
    limited_named(value, lower, upper, "Value")
}

/// Check that a value lies within an interval, naming it in diagnostics
///
/// Same contract as [`limited`] with a caller-supplied label for the
/// out-of-range message, e.g.
/// `"Timeout must be in range [0, 60]. 61 found instead."`.
pub fn limited_named<T: RangeElement>(
    value: T,
    lower: Option<T>,
    upper: Option<T>,
    label: &str,
) -> Result<T> {
    let interval = Interval::new(lower, upper)?;

    if interval.contains(value) {
        Ok(value)
    } else {
        Err(RangeforceError::OutOfRange(format!(
            "{} must be in range {}. {} found instead.",
            label,
            interval,
            value.render()
        )))
    }
}
