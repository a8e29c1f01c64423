//! Check-digit validation primitives.
//!
//! The [`verhoeff`] module implements the Verhoeff checksum over base-10
//! digit strings: a 10-state reduction through fixed multiplication and
//! permutation tables that catches every single-digit substitution and
//! every adjacent transposition, which plain mod-10 schemes miss. The core
//! is length-agnostic; the [`aadhaar`] module carries the 12-digit scheme
//! boundary used for Aadhaar identifiers.
//!
//! Everything here is a pure, synchronous function over `&str`. The lookup
//! tables are `const` data, so calls are safe from any number of threads
//! without locking.
//!
//! ```
//! use checkdigit_core::{aadhaar, verhoeff};
//!
//! let full = verhoeff::append_check_digit("12345678901")?;
//! assert!(verhoeff::validate(&full)?);
//! assert!(aadhaar::is_valid(&full));
//! # Ok::<(), checkdigit_core::DigitStringError>(())
//! ```

pub mod aadhaar;
pub mod errors;
pub mod verhoeff;

pub use errors::{AadhaarError, DigitStringError};
