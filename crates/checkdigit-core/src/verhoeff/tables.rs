//! Fixed lookup tables for the Verhoeff scheme.
//!
//! `D` is the Cayley table of the dihedral group D5, `P` the positional
//! permutation applied cyclically with period 8, and `INV` the group
//! inverse of each digit. All three are process-wide constants; nothing
//! here is ever built or mutated at runtime.

/// Multiplication table: `D[c][d]` is the next checksum state after
/// consuming permuted digit `d` in state `c`.
pub(crate) const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

/// Permutation table: row `i % 8` is applied to the digit at reversed
/// position `i` before the group multiplication. The modulus keeps the
/// lookup total for any input length.
pub(crate) const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

/// Inverse table: `D[d][INV[d]] == 0` for every digit `d`. Only used when
/// generating a check digit.
pub(crate) const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];
