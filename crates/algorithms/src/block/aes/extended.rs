//! AES-192 and AES-256
//!
//! Batch ciphers only. They share the round transforms and the generic key
//! expansion with AES-128, but the step controller drives AES-128 alone.

use stepcrypt_api::BlockCipher;
use stepcrypt_params::utils::symmetric::{
    AES192_KEY_SIZE, AES192_ROUND_KEYS, AES256_KEY_SIZE, AES256_ROUND_KEYS, AES_BLOCK_SIZE,
};

use crate::error::{validate, Result};
use crate::types::{Aes192Key, Aes256Key, StateMatrix};

use super::key_schedule::{expand, RoundKeys};
use super::{decrypt_matrix, encrypt_matrix};

/// AES-192 block cipher
#[derive(Clone)]
pub struct Aes192 {
    round_keys: RoundKeys<AES192_ROUND_KEYS>,
}

/// AES-256 block cipher
#[derive(Clone)]
pub struct Aes256 {
    round_keys: RoundKeys<AES256_ROUND_KEYS>,
}

fn crypt_in_place(
    block: &mut [u8],
    round_keys: &[StateMatrix],
    f: fn(StateMatrix, &[StateMatrix]) -> StateMatrix,
) -> Result<()> {
    validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
    let state = StateMatrix::from_slice(block)?;
    block.copy_from_slice(&f(state, round_keys).to_block());
    Ok(())
}

impl Aes192 {
    /// Expanded round keys (13)
    pub fn round_keys(&self) -> &RoundKeys<AES192_ROUND_KEYS> {
        &self.round_keys
    }
}

impl Aes256 {
    /// Expanded round keys (15)
    pub fn round_keys(&self) -> &RoundKeys<AES256_ROUND_KEYS> {
        &self.round_keys
    }
}

impl BlockCipher for Aes192 {
    type Key = Aes192Key;

    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-192"
    }

    fn new(key: &Self::Key) -> Self {
        Aes192 {
            round_keys: expand::<AES192_KEY_SIZE, AES192_ROUND_KEYS>(key),
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        crypt_in_place(block, self.round_keys.as_slice(), encrypt_matrix)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        crypt_in_place(block, self.round_keys.as_slice(), decrypt_matrix)
    }
}

impl BlockCipher for Aes256 {
    type Key = Aes256Key;

    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }

    fn new(key: &Self::Key) -> Self {
        Aes256 {
            round_keys: expand::<AES256_KEY_SIZE, AES256_ROUND_KEYS>(key),
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        crypt_in_place(block, self.round_keys.as_slice(), encrypt_matrix)
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        crypt_in_place(block, self.round_keys.as_slice(), decrypt_matrix)
    }
}
