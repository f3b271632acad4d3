//! Range checkers for numeric values
//!
//! This module contains pure validation functions with no I/O
//! dependencies. The general-purpose checker lives in [`limited`];
//! the fixed-width and sign-constrained integer checkers are thin
//! wrappers over it with fixed bounds.

pub mod limited;
pub mod sign;
pub mod width;

pub use limited::{limited, limited_named};
pub use sign::{negative_int, nonnegative_int, nonpositive_int, positive_int};
pub use width::{int16, int32, int64, int8, uint16, uint32, uint64, uint8, uint_bits};
