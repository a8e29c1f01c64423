//! Error taxonomy for digit-string validation.
//!
//! There are exactly two failure surfaces: the core algorithm's
//! digit-string precondition ([`DigitStringError`]) and the Aadhaar scheme
//! boundary ([`AadhaarError`]). The checksum itself cannot fail on
//! well-formed input; it always reduces to a boolean.

use thiserror::Error;

/// Violation of the digit-string precondition shared by the core
/// operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DigitStringError {
    /// The input held no digits at all. Rejected before the reduction loop
    /// rather than treated as trivially valid.
    #[error("digit string is empty")]
    Empty,

    /// The input contained a byte outside `0-9`. `pos` is the byte offset
    /// in the original (unreversed) input.
    #[error("non-digit byte {byte:#04x} at position {pos}")]
    NonDigit { byte: u8, pos: usize },
}

/// Scheme-level failure for 12-digit Aadhaar identifiers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AadhaarError {
    /// The input did not pass the `^[0-9]{12}$` format gate.
    #[error("aadhaar number must be exactly 12 decimal digits")]
    InvalidFormat,

    /// Well-formed input whose Verhoeff reduction ended in a non-zero
    /// state.
    #[error("aadhaar checksum mismatch")]
    ChecksumMismatch,
}
