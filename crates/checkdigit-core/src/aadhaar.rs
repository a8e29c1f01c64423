//! Aadhaar identifier validation (12-digit scheme boundary).
//!
//! The Verhoeff core is length-agnostic; the Aadhaar-specific constraint
//! lives here: exactly twelve ASCII digits, gated by a regex pre-check
//! before the checksum runs. The gate uses `[0-9]` rather than `\d` so
//! non-ASCII decimal digits are rejected at the format stage, keeping the
//! core's digit-string precondition satisfied whenever the gate passes.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::AadhaarError;
use crate::verhoeff;

/// Aadhaar identifiers are always twelve digits, the last one a Verhoeff
/// check digit over the first eleven.
pub const AADHAAR_LEN: usize = 12;

lazy_static! {
    /// Format gate applied before the checksum.
    static ref AADHAAR_FORMAT: Regex = Regex::new(r"^[0-9]{12}$").unwrap();
}

/// Validates an Aadhaar identifier, distinguishing format failures from
/// checksum failures.
pub fn validate(value: &str) -> Result<(), AadhaarError> {
    if !AADHAAR_FORMAT.is_match(value) {
        // Length only; the value itself is an identifier and stays out of
        // logs.
        tracing::debug!(len = value.len(), "aadhaar format pre-check failed");
        return Err(AadhaarError::InvalidFormat);
    }
    // The gate guarantees the core precondition; an error here is
    // unreachable and maps to the format kind.
    let ok = verhoeff::validate(value).map_err(|_| AadhaarError::InvalidFormat)?;
    if ok {
        Ok(())
    } else {
        tracing::debug!("aadhaar checksum mismatch");
        Err(AadhaarError::ChecksumMismatch)
    }
}

/// Boolean contract used by form-style callers: format failures and
/// checksum failures both collapse to `false`. Total over any `&str`.
pub fn is_valid(value: &str) -> bool {
    validate(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_checksummed_twelve_digits() {
        assert_eq!(validate("123456789010"), Ok(()));
        assert!(is_valid("123456789010"));
    }

    #[test]
    fn rejects_checksum_mismatch() {
        assert_eq!(
            validate("123456789012"),
            Err(AadhaarError::ChecksumMismatch)
        );
        assert!(!is_valid("123456789012"));
    }

    #[test]
    fn rejects_wrong_length_and_charset_as_format() {
        let bad = [
            "",
            "12345678901",
            "1234567890102",
            "12345678901a",
            "123-45678901",
            "１２３４５６７８９０１０", // fullwidth digits fail the ASCII gate
        ];
        for value in bad {
            assert_eq!(
                validate(value),
                Err(AadhaarError::InvalidFormat),
                "{value:?}"
            );
            assert!(!is_valid(value));
        }
    }

    #[test]
    fn scheme_length_matches_gate() {
        assert_eq!(AADHAAR_LEN, 12);
    }
}
