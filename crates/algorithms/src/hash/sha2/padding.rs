//! Message padding and block parsing

use byteorder::{BigEndian, ByteOrder};

use stepcrypt_params::utils::hash::{
    SHA256_BLOCK_SIZE, SHA256_BLOCK_WORDS, SHA256_LENGTH_FIELD_SIZE, SHA256_PAD_MARKER,
};

use crate::error::{validate, Result};

use super::MessageBlock;

/// Length in bytes of the padded form of an `len`-byte message
pub fn padded_len(len: usize) -> usize {
    // marker byte plus length field, rounded up to whole blocks
    (len + 1 + SHA256_LENGTH_FIELD_SIZE).next_multiple_of(SHA256_BLOCK_SIZE)
}

/// Message length in bits as written into the length field (mod 2⁶⁴)
pub fn encoded_bit_length(len: usize) -> u64 {
    (len as u64).wrapping_mul(8)
}

/// Pad a message: 0x80, zeros up to 56 mod 64, then the 64-bit big-endian
/// bit length
pub fn pad(message: &[u8]) -> Vec<u8> {
    let total = padded_len(message.len());
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(message);
    out.push(SHA256_PAD_MARKER);
    out.resize(total - SHA256_LENGTH_FIELD_SIZE, 0);

    let mut length = [0u8; SHA256_LENGTH_FIELD_SIZE];
    BigEndian::write_u64(&mut length, encoded_bit_length(message.len()));
    out.extend_from_slice(&length);
    out
}

/// Split a padded stream into blocks of sixteen big-endian words.
///
/// The stream must be non-empty and a whole number of 64-byte blocks.
pub fn parse_blocks(padded: &[u8]) -> Result<Vec<MessageBlock>> {
    validate::parameter(!padded.is_empty(), "padded", "must not be empty")?;
    validate::multiple_of("SHA-256 padded stream", padded.len(), SHA256_BLOCK_SIZE)?;
    Ok(split_blocks(padded))
}

// Trailing bytes short of a block are dropped; callers pass `pad` output.
pub(crate) fn split_blocks(padded: &[u8]) -> Vec<MessageBlock> {
    padded
        .chunks_exact(SHA256_BLOCK_SIZE)
        .map(|chunk| {
            let mut block = [0u32; SHA256_BLOCK_WORDS];
            BigEndian::read_u32_into(chunk, &mut block);
            block
        })
        .collect()
}
