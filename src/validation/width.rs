//! Fixed-width integer range checks
//!
//! Values are taken as `i128` so an out-of-range input for any
//! supported width, up to the full `uint64` range, can still be
//! inspected and reported. The `2^n` arithmetic lives in the two
//! helpers below; every public checker is a thin wrapper over
//! [`limited_named`] with the width-specific bounds and label.

use alloc::format;

use crate::validation::limited_named;
use crate::{RangeforceError, Result};

/// Largest bit width accepted by [`uint_bits`]
///
/// The upper extreme `2^bits - 1` must be representable in `i128`.
pub const MAX_BITS: u32 = 127;

/// Largest value representable in `bits` unsigned binary digits
const fn unsigned_max(bits: u32) -> i128 {
    (u128::MAX >> (128 - bits)) as i128
}

/// Inclusive extremes of a signed integer of the given width
const fn signed_extremes(bits: u32) -> (i128, i128) {
    let magnitude = 1i128 << (bits - 1);
    (-magnitude, magnitude - 1)
}

fn uint_fixed(value: i128, bits: u32, label: &str) -> Result<i128> {
    limited_named(value, Some(0), Some(unsigned_max(bits)), label)
}

fn int_fixed(value: i128, bits: u32, label: &str) -> Result<i128> {
    let (lower, upper) = signed_extremes(bits);
    limited_named(value, Some(lower), Some(upper), label)
}

/// Check that a value fits an unsigned 8-bit integer
pub fn uint8(value: i128) -> Result<i128> {
    uint_fixed(value, 8, "uint8")
}

/// Check that a value fits an unsigned 16-bit integer
pub fn uint16(value: i128) -> Result<i128> {
    uint_fixed(value, 16, "uint16")
}

/// Check that a value fits an unsigned 32-bit integer
pub fn uint32(value: i128) -> Result<i128> {
    uint_fixed(value, 32, "uint32")
}

/// Check that a value fits an unsigned 64-bit integer
pub fn uint64(value: i128) -> Result<i128> {
    uint_fixed(value, 64, "uint64")
}

/// Check that a value fits a signed 8-bit integer
pub fn int8(value: i128) -> Result<i128> {
    int_fixed(value, 8, "int8")
}

/// Check that a value fits a signed 16-bit integer
pub fn int16(value: i128) -> Result<i128> {
    int_fixed(value, 16, "int16")
}

/// Check that a value fits a signed 32-bit integer
pub fn int32(value: i128) -> Result<i128> {
    int_fixed(value, 32, "int32")
}

/// Check that a value fits a signed 64-bit integer
pub fn int64(value: i128) -> Result<i128> {
    int_fixed(value, 64, "int64")
}

/// Check that a value fits an unsigned integer of an arbitrary width
///
/// The valid range is `[0, 2^bits - 1]`. A width of zero, or one whose
/// upper extreme exceeds `i128`, is a `Configuration` error: it is a
/// mistake in the calling code, not a bad input value.
pub fn uint_bits(value: i128, bits: u32) -> Result<i128> {
    if bits == 0 || bits > MAX_BITS {
        return Err(RangeforceError::Configuration(format!(
            "Number of bits must be in range [1, {}]. {} found instead.",
            MAX_BITS, bits
        )));
    }
    limited_named(
        value,
        Some(0),
        Some(unsigned_max(bits)),
        &format!("uint{}", bits),
    )
}
