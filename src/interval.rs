//! Interval bound normalization and rendering
//!
//! This module defines the validated interval type the range checkers
//! are built on. Normalization is a pure function and runs on every
//! construction, since bounds may differ from call to call.

use alloc::format;
use alloc::string::String;

use crate::{RangeElement, RangeforceError, Result};

/// A normalized pair of interval extremes
///
/// Each side is either a concrete, inclusive extreme or open
/// (unbounded). `None` is the only representation of an open side;
/// a concrete infinity stays an ordinary comparable extreme.
///
/// Invariants established by [`Interval::new`]: at least one side is
/// concrete, no concrete extreme is NaN, and when both sides are
/// concrete they are in order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval<T: RangeElement> {
    lower: Option<T>,
    upper: Option<T>,
}

impl<T: RangeElement> Interval<T> {
    /// Normalize a pair of optional extremes into a checked interval
    ///
    /// Fails with a `Configuration` error when both sides are open,
    /// when a concrete extreme is NaN, or when the extremes are out of
    /// order. Otherwise the pair is returned unchanged.
    pub fn new(lower: Option<T>, upper: Option<T>) -> Result<Self> {
        if lower.is_none() && upper.is_none() {
            return Err(RangeforceError::Configuration(String::from(
                "[min, max] interval must be closed on at least one extreme.",
            )));
        }

        if lower.map_or(false, |extreme| extreme.is_nan()) {
            return Err(RangeforceError::Configuration(String::from(
                "NaN is not a valid interval lower bound.",
            )));
        }

        if upper.map_or(false, |extreme| extreme.is_nan()) {
            return Err(RangeforceError::Configuration(String::from(
                "NaN is not a valid interval upper bound.",
            )));
        }

        if let (Some(lo), Some(hi)) = (lower, upper) {
            if lo > hi {
                return Err(RangeforceError::Configuration(format!(
                    "Interval extremes [{}, {}] not in order.",
                    lo.render(),
                    hi.render()
                )));
            }
        }

        Ok(Interval { lower, upper })
    }

    /// Lower extreme, `None` when the side is open
    pub fn lower(&self) -> Option<T> {
        self.lower
    }

    /// Upper extreme, `None` when the side is open
    pub fn upper(&self) -> Option<T> {
        self.upper
    }

    /// Membership test
    ///
    /// Concrete sides are inclusive, open sides always satisfied.
    /// NaN is never a member, whatever the bounds.
    pub fn contains(&self, value: T) -> bool {
        if value.is_nan() {
            return false;
        }

        let above_lower = match self.lower {
            Some(lo) => lo <= value,
            None => true,
        };
        let below_upper = match self.upper {
            Some(hi) => value <= hi,
            None => true,
        };

        above_lower && below_upper
    }
}

impl<T: RangeElement> core::fmt::Display for Interval<T> {
    /// Mathematical bracket notation: `[0, 255]`, `]-inf, 0]`,
    /// `[1, +inf[`
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.lower {
            Some(lo) => write!(f, "[{}, ", lo.render())?,
            None => f.write_str("]-inf, ")?,
        }
        match self.upper {
            Some(hi) => write!(f, "{}]", hi.render()),
            None => f.write_str("+inf["),
        }
    }
}
