//! Error types for range validation

use alloc::string::String;

/// Errors that can occur during range validation
///
/// Both variants carry the fully formatted diagnostic message. A
/// `Configuration` error means the interval definition itself is
/// invalid and indicates a mistake in the calling code; an
/// `OutOfRange` error is the expected, recoverable failure for a
/// value that misses a well-formed interval.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RangeforceError {
    /// The interval definition is invalid (both extremes open,
    /// extremes out of order, a NaN extreme, or a bad bit width)
    Configuration(String),
    /// The value does not satisfy an otherwise valid interval
    OutOfRange(String),
}

impl RangeforceError {
    /// Human-readable description of the failure
    pub fn message(&self) -> &str {
        match self {
            RangeforceError::Configuration(msg) | RangeforceError::OutOfRange(msg) => msg,
        }
    }
}

impl core::fmt::Display for RangeforceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl core::error::Error for RangeforceError {}

/// Result type for range validation
pub type Result<T> = core::result::Result<T, RangeforceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::{String, ToString};

    #[test]
    fn test_display_prints_message_verbatim() {
        let err = RangeforceError::OutOfRange(String::from(
            "Value must be in range [0, 1]. 2 found instead.",
        ));
        assert_eq!(err.to_string(), "Value must be in range [0, 1]. 2 found instead.");
        assert_eq!(err.message(), "Value must be in range [0, 1]. 2 found instead.");
    }

    #[test]
    fn test_kinds_are_distinct() {
        let config = RangeforceError::Configuration(String::from("a"));
        let range = RangeforceError::OutOfRange(String::from("a"));
        assert_ne!(config, range);
    }
}
