//! AES key material
//!
//! Keys are accepted either as raw bytes or as hexadecimal text. Text that
//! is the wrong length or contains non-hex characters is rejected outright;
//! nothing is truncated or zero-filled.

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use stepcrypt_params::utils::symmetric::{AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE};

use crate::error::{validate, Result, ResultExt};

/// A raw AES key of `N` bytes, zeroized on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AesKey<const N: usize> {
    data: [u8; N],
}

/// 128-bit AES key
pub type Aes128Key = AesKey<AES128_KEY_SIZE>;
/// 192-bit AES key
pub type Aes192Key = AesKey<AES192_KEY_SIZE>;
/// 256-bit AES key
pub type Aes256Key = AesKey<AES256_KEY_SIZE>;

impl<const N: usize> AesKey<N> {
    /// Wrap raw key bytes
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Copy a key out of a slice of exactly `N` bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::length(key_context(N), bytes.len(), N)?;
        let mut data = [0u8; N];
        data.copy_from_slice(bytes);
        Ok(Self { data })
    }

    /// Parse a key written as exactly `2N` hexadecimal characters
    pub fn from_hex(text: &str) -> Result<Self> {
        let context = key_context(N);
        validate::length(context, text.len(), N * 2)?;
        let mut data = [0u8; N];
        hex::decode_to_slice(text, &mut data).with_context(context)?;
        Ok(Self { data })
    }

    /// Key size in bytes
    pub const fn len(&self) -> usize {
        N
    }

    /// Always false for a real key size
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrow the key bytes
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.data
    }
}

impl<const N: usize> AsRef<[u8]> for AesKey<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> fmt::Debug for AesKey<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AesKey<{}>([REDACTED])", N)
    }
}

fn key_context(size: usize) -> &'static str {
    match size {
        AES128_KEY_SIZE => "AES-128 key",
        AES192_KEY_SIZE => "AES-192 key",
        AES256_KEY_SIZE => "AES-256 key",
        _ => "AES key",
    }
}
