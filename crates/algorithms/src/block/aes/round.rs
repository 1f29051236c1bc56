//! The four AES round transforms and their inverses
//!
//! Each transform takes a state matrix by value and returns a new one; the
//! input is never touched, so a caller can keep the pre-transform state for
//! comparison.

use crate::gf;
use crate::types::StateMatrix;

use super::tables::{inv_sub_byte, sub_byte};

/// Fixed MixColumns polynomial matrix
pub const MIX_MATRIX: [[u8; 4]; 4] = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];

/// Inverse of [`MIX_MATRIX`] over GF(2⁸)
pub const INV_MIX_MATRIX: [[u8; 4]; 4] = [
    [0x0e, 0x0b, 0x0d, 0x09],
    [0x09, 0x0e, 0x0b, 0x0d],
    [0x0d, 0x09, 0x0e, 0x0b],
    [0x0b, 0x0d, 0x09, 0x0e],
];

/// SubBytes: replace every byte with its S-box image
pub fn sub_bytes(state: StateMatrix) -> StateMatrix {
    state.map(sub_byte)
}

/// Inverse SubBytes
pub fn inv_sub_bytes(state: StateMatrix) -> StateMatrix {
    state.map(inv_sub_byte)
}

/// ShiftRows: rotate row `r` left by `r` positions
pub fn shift_rows(state: StateMatrix) -> StateMatrix {
    let mut out = state;
    for (r, row) in state.rows().iter().enumerate() {
        for c in 0..4 {
            out.set(r, c, row[(c + r) % 4]);
        }
    }
    out
}

/// Inverse ShiftRows: rotate row `r` right by `r` positions
pub fn inv_shift_rows(state: StateMatrix) -> StateMatrix {
    let mut out = state;
    for (r, row) in state.rows().iter().enumerate() {
        for c in 0..4 {
            out.set(r, (c + r) % 4, row[c]);
        }
    }
    out
}

/// Multiply one column by a 4×4 matrix over GF(2⁸)
pub fn mix_column(matrix: &[[u8; 4]; 4], column: [u8; 4]) -> [u8; 4] {
    let mut out = [0u8; 4];
    for (cell, coeffs) in out.iter_mut().zip(matrix.iter()) {
        *cell = coeffs
            .iter()
            .zip(column.iter())
            .fold(0u8, |acc, (&k, &b)| acc ^ gf::mul(k, b));
    }
    out
}

/// MixColumns: multiply each column by [`MIX_MATRIX`]
pub fn mix_columns(state: StateMatrix) -> StateMatrix {
    let mut out = state;
    for c in 0..4 {
        out.set_column(c, mix_column(&MIX_MATRIX, state.column(c)));
    }
    out
}

/// Inverse MixColumns
pub fn inv_mix_columns(state: StateMatrix) -> StateMatrix {
    let mut out = state;
    for c in 0..4 {
        out.set_column(c, mix_column(&INV_MIX_MATRIX, state.column(c)));
    }
    out
}

/// AddRoundKey: XOR every byte with the round key matrix.
///
/// Self-inverse.
pub fn add_round_key(state: StateMatrix, round_key: &StateMatrix) -> StateMatrix {
    state.xor(round_key)
}
