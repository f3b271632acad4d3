//! Sign-constrained integer checks
//!
//! One-sided wrappers over [`limited_named`]: each fixes a single
//! concrete extreme and leaves the other side open.

use crate::validation::limited_named;
use crate::Result;

/// Check that a value is a positive integer, i.e. in `[1, +inf[`
pub fn positive_int(value: i128) -> Result<i128> {
    limited_named(value, Some(1), None, "Positive integer")
}

/// Check that a value is zero or positive, i.e. in `[0, +inf[`
pub fn nonnegative_int(value: i128) -> Result<i128> {
    limited_named(value, Some(0), None, "Non-negative integer")
}

/// Check that a value is a negative integer, i.e. in `]-inf, -1]`
pub fn negative_int(value: i128) -> Result<i128> {
    limited_named(value, None, Some(-1), "Negative integer")
}

/// Check that a value is zero or negative, i.e. in `]-inf, 0]`
pub fn nonpositive_int(value: i128) -> Result<i128> {
    limited_named(value, None, Some(0), "Non-positive integer")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RangeforceError;
    use alloc::string::String;

    fn assert_out_of_range(result: Result<i128>) {
        match result {
            Err(RangeforceError::OutOfRange(_)) => {}
            other => panic!("expected an out-of-range failure, got {:?}", other),
        }
    }

    #[test]
    fn test_positive_int() {
        assert_eq!(positive_int(1), Ok(1));
        assert_eq!(positive_int(20), Ok(20));

        assert_out_of_range(positive_int(0));
        assert_out_of_range(positive_int(-1));
        assert_out_of_range(positive_int(-100));

        assert_eq!(
            positive_int(0),
            Err(RangeforceError::OutOfRange(String::from(
                "Positive integer must be in range [1, +inf[. 0 found instead."
            )))
        );
    }

    #[test]
    fn test_nonnegative_int() {
        assert_eq!(nonnegative_int(0), Ok(0));
        assert_eq!(nonnegative_int(20), Ok(20));

        assert_out_of_range(nonnegative_int(-1));
        assert_out_of_range(nonnegative_int(-100));
    }

    #[test]
    fn test_negative_int() {
        assert_eq!(negative_int(-1), Ok(-1));
        assert_eq!(negative_int(-20), Ok(-20));

        assert_out_of_range(negative_int(0));
        assert_out_of_range(negative_int(1));
        assert_out_of_range(negative_int(100));

        assert_eq!(
            negative_int(0),
            Err(RangeforceError::OutOfRange(String::from(
                "Negative integer must be in range ]-inf, -1]. 0 found instead."
            )))
        );
    }

    #[test]
    fn test_nonpositive_int() {
        assert_eq!(nonpositive_int(0), Ok(0));
        assert_eq!(nonpositive_int(-20), Ok(-20));

        assert_out_of_range(nonpositive_int(1));
        assert_out_of_range(nonpositive_int(100));
    }
}
