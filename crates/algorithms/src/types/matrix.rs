//! The AES state as a 4×4 byte grid
//!
//! A 16-byte block fills the grid column by column: byte `4c + r` lands in
//! row `r`, column `c`. Round keys use the same layout, so a key matrix can
//! be XORed cell by cell onto the state.

use core::fmt;
use zeroize::Zeroize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use stepcrypt_params::utils::symmetric::{AES_BLOCK_SIZE, AES_STATE_DIM};

use crate::error::{validate, Result};

const DIM: usize = AES_STATE_DIM;

/// A 4×4 matrix of bytes indexed `[row][column]`
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Zeroize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateMatrix {
    cells: [[u8; DIM]; DIM],
}

impl StateMatrix {
    /// Build a matrix from explicit rows
    pub const fn from_rows(cells: [[u8; DIM]; DIM]) -> Self {
        Self { cells }
    }

    /// Lay a 16-byte block into the grid column-major
    pub fn from_block(block: &[u8; AES_BLOCK_SIZE]) -> Self {
        let mut cells = [[0u8; DIM]; DIM];
        for (i, &byte) in block.iter().enumerate() {
            cells[i % DIM][i / DIM] = byte;
        }
        Self { cells }
    }

    /// Slice-based variant of [`from_block`](Self::from_block)
    pub fn from_slice(block: &[u8]) -> Result<Self> {
        validate::length("AES state block", block.len(), AES_BLOCK_SIZE)?;
        let mut buf = [0u8; AES_BLOCK_SIZE];
        buf.copy_from_slice(block);
        Ok(Self::from_block(&buf))
    }

    /// Read the grid back out as a block, column-major
    pub fn to_block(&self) -> [u8; AES_BLOCK_SIZE] {
        let mut block = [0u8; AES_BLOCK_SIZE];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = self.cells[i % DIM][i / DIM];
        }
        block
    }

    /// Byte at `row`, `col`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Overwrite the byte at `row`, `col`
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        self.cells[row][col] = value;
    }

    /// All rows
    pub fn rows(&self) -> &[[u8; DIM]; DIM] {
        &self.cells
    }

    /// Column `col` read top to bottom
    pub fn column(&self, col: usize) -> [u8; DIM] {
        [
            self.cells[0][col],
            self.cells[1][col],
            self.cells[2][col],
            self.cells[3][col],
        ]
    }

    /// Replace column `col`
    pub fn set_column(&mut self, col: usize, column: [u8; DIM]) {
        for (row, byte) in column.into_iter().enumerate() {
            self.cells[row][col] = byte;
        }
    }

    /// Cell-wise XOR with another matrix
    pub fn xor(&self, other: &StateMatrix) -> StateMatrix {
        let mut out = *self;
        for (out_row, other_row) in out.cells.iter_mut().zip(other.cells.iter()) {
            for (cell, &k) in out_row.iter_mut().zip(other_row.iter()) {
                *cell ^= k;
            }
        }
        out
    }

    /// Apply `f` to every byte
    pub fn map(&self, f: impl Fn(u8) -> u8) -> StateMatrix {
        let mut out = *self;
        for cell in out.cells.iter_mut().flatten() {
            *cell = f(*cell);
        }
        out
    }

    /// Which cells differ between `self` and `other`
    pub fn diff(&self, other: &StateMatrix) -> DiffMask {
        let mut mask = [[false; DIM]; DIM];
        for (r, row) in mask.iter_mut().enumerate() {
            for (c, changed) in row.iter_mut().enumerate() {
                *changed = self.cells[r][c] != other.cells[r][c];
            }
        }
        DiffMask { cells: mask }
    }

    /// Lowercase hex of the block form
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_block())
    }
}

impl From<[u8; AES_BLOCK_SIZE]> for StateMatrix {
    fn from(block: [u8; AES_BLOCK_SIZE]) -> Self {
        Self::from_block(&block)
    }
}

impl From<StateMatrix> for [u8; AES_BLOCK_SIZE] {
    fn from(matrix: StateMatrix) -> Self {
        matrix.to_block()
    }
}

impl fmt::Debug for StateMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StateMatrix({})", self.to_hex())
    }
}

impl fmt::Display for StateMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:02x} {:02x} {:02x} {:02x}",
                row[0], row[1], row[2], row[3]
            )?;
        }
        Ok(())
    }
}

/// Per-cell change flags between two state matrices
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiffMask {
    cells: [[bool; DIM]; DIM],
}

impl DiffMask {
    /// Whether the byte at `row`, `col` changed
    #[inline]
    pub fn is_changed(&self, row: usize, col: usize) -> bool {
        self.cells[row][col]
    }

    /// Number of changed cells
    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&c| c).count()
    }

    /// Whether any cell changed
    pub fn any(&self) -> bool {
        self.cells.iter().flatten().any(|&c| c)
    }

    /// All flags, `[row][column]`
    pub fn rows(&self) -> &[[bool; DIM]; DIM] {
        &self.cells
    }
}
