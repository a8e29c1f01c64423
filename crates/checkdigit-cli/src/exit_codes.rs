//! Unified exit codes for the checkdigit binary.
//! These codes are part of the public contract; scripts branch on them.

pub const OK: i32 = 0;
pub const INVALID: i32 = 1; // Format or checksum validation failed
pub const USAGE_ERROR: i32 = 2; // Malformed invocation or internal error
