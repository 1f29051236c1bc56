//! AES block cipher implementations
//!
//! This module implements the Advanced Encryption Standard (AES) block cipher
//! as specified in FIPS 197, built from the pieces a step-by-step view needs
//! to expose individually:
//!
//! - [`tables`]: the fixed S-box and round constants
//! - [`key_schedule`]: key expansion into round-key matrices
//! - [`round`]: SubBytes, ShiftRows, MixColumns and AddRoundKey as pure
//!   matrix-to-matrix functions, plus their inverses
//!
//! [`Aes128`] runs all rounds in one call and is the reference the stepped
//! controller in [`crate::step::aes`] is checked against. AES-192 and
//! AES-256 live apart in [`extended`].
//!
//! No attempt is made at constant-time execution; table lookups index by
//! secret bytes.

pub mod extended;
pub mod key_schedule;
pub mod round;
pub mod tables;

pub use extended::{Aes192, Aes256};
pub use key_schedule::{expand_key, Aes128RoundKeys, RoundKeys};
pub use round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

use stepcrypt_api::BlockCipher;
use stepcrypt_params::utils::symmetric::{AES128_ROUND_KEYS, AES_BLOCK_SIZE};

use crate::error::{validate, Result};
use crate::types::{Aes128Key, StateMatrix};

/// Truncate or zero-pad arbitrary bytes to one 16-byte block
pub fn block_from_text(text: &[u8]) -> [u8; AES_BLOCK_SIZE] {
    let mut block = [0u8; AES_BLOCK_SIZE];
    let n = text.len().min(AES_BLOCK_SIZE);
    block[..n].copy_from_slice(&text[..n]);
    block
}

/// Run the full forward cipher over `round_keys.len() - 1` rounds
///
/// # Panics
///
/// If fewer than two round keys are supplied.
pub fn encrypt_matrix(state: StateMatrix, round_keys: &[StateMatrix]) -> StateMatrix {
    let last = round_keys.len() - 1;

    // Initial round - AddRoundKey
    let mut state = add_round_key(state, &round_keys[0]);

    // Main rounds
    for key in &round_keys[1..last] {
        state = add_round_key(mix_columns(shift_rows(sub_bytes(state))), key);
    }

    // Final round
    add_round_key(shift_rows(sub_bytes(state)), &round_keys[last])
}

/// Run the inverse cipher, consuming the round keys in reverse
pub fn decrypt_matrix(state: StateMatrix, round_keys: &[StateMatrix]) -> StateMatrix {
    let last = round_keys.len() - 1;

    // Initial round - AddRoundKey (final round key)
    let mut state = add_round_key(state, &round_keys[last]);

    // Main rounds in reverse
    for key in round_keys[1..last].iter().rev() {
        state = inv_sub_bytes(inv_shift_rows(state));
        state = inv_mix_columns(add_round_key(state, key));
    }

    // Final round
    add_round_key(inv_sub_bytes(inv_shift_rows(state)), &round_keys[0])
}

/// AES-128 block cipher
#[derive(Clone)]
pub struct Aes128 {
    round_keys: RoundKeys<AES128_ROUND_KEYS>,
}

impl Aes128 {
    /// Expanded round keys
    pub fn round_keys(&self) -> &Aes128RoundKeys {
        &self.round_keys
    }

    /// Encrypt one block held in an array
    pub fn encrypt(&self, block: &[u8; AES_BLOCK_SIZE]) -> [u8; AES_BLOCK_SIZE] {
        encrypt_matrix(StateMatrix::from_block(block), self.round_keys.as_slice()).to_block()
    }

    /// Decrypt one block held in an array
    pub fn decrypt(&self, block: &[u8; AES_BLOCK_SIZE]) -> [u8; AES_BLOCK_SIZE] {
        decrypt_matrix(StateMatrix::from_block(block), self.round_keys.as_slice()).to_block()
    }
}

impl BlockCipher for Aes128 {
    type Key = Aes128Key;

    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-128"
    }

    fn new(key: &Self::Key) -> Self {
        Aes128 {
            round_keys: expand_key(key),
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        // Use validation utility for length check
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        let state = StateMatrix::from_slice(block)?;
        block.copy_from_slice(&encrypt_matrix(state, self.round_keys.as_slice()).to_block());
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        let state = StateMatrix::from_slice(block)?;
        block.copy_from_slice(&decrypt_matrix(state, self.round_keys.as_slice()).to_block());
        Ok(())
    }
}
