//! Block cipher trait

use crate::Result;

/// A keyed permutation over fixed-size blocks
pub trait BlockCipher: Sized {
    /// Key type accepted by [`new`](BlockCipher::new)
    type Key;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Human readable name of the algorithm
    fn name() -> &'static str;

    /// Expand the key and build the cipher
    fn new(key: &Self::Key) -> Self;

    /// Encrypt a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypt a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;
}
