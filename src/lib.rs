#![no_std]

//! Rangeforce - Numeric Range Validation
//!
//! This crate provides pure range-checking functions for numeric values:
//! a general interval check ([`limited`]), fixed-width and
//! sign-constrained integer checks built on top of it, and a
//! non-failing clamp ([`clip()`]).
//!
//! Every check either returns the value unchanged as proof it satisfies
//! the contract, or fails with one of two error kinds: a
//! [`RangeforceError::Configuration`] when the interval definition
//! itself is invalid, or a [`RangeforceError::OutOfRange`] when the
//! value misses an otherwise well-formed interval. All functions are
//! stateless and side-effect-free.

extern crate alloc;

pub mod clip;
pub mod element;
pub mod error;
pub mod interval;
pub mod validation;

pub use clip::*;
pub use element::*;
pub use error::*;
pub use interval::*;
pub use validation::*;
