//! SHA-256 hash function
//!
//! This module implements SHA-256 as specified in FIPS PUB 180-4, split into
//! its three stages so each can be driven and inspected separately:
//!
//! - [`padding`]: padding and parsing into sixteen-word blocks
//! - [`schedule`]: expansion of a block into the 64-word message schedule
//! - [`compress`]: the compression round and whole-block compression
//!
//! [`Sha256::digest`] chains them in one call and is the reference the
//! stepped controller in [`crate::step::sha256`] is checked against.

use stepcrypt_api::HashAlgorithm;
use stepcrypt_params::utils::hash::{
    SHA256_BLOCK_SIZE, SHA256_BLOCK_WORDS, SHA256_OUTPUT_SIZE, SHA256_ROUNDS,
    SHA256_SCHEDULE_WORDS,
};

use crate::types::{Registers, Sha256Digest};

pub mod compress;
pub mod padding;
pub mod schedule;

pub use compress::{big_sigma0, big_sigma1, ch, compress_block, maj, round};
pub use padding::{encoded_bit_length, pad, padded_len, parse_blocks};
pub use schedule::{expand, small_sigma0, small_sigma1};

/// One parsed 512-bit block
pub type MessageBlock = [u32; SHA256_BLOCK_WORDS];

/// The 64-word message schedule of one block
pub type MessageSchedule = [u32; SHA256_SCHEDULE_WORDS];

/// SHA-256 round constants
pub const K256: [u32; SHA256_ROUNDS] = [
    0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
    0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
    0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
    0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
    0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
    0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
    0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
    0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
];

/// Initial hash value H(0)
pub const INITIAL_HASH: Registers = Registers::new([
    0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a, 0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
]);

/// Marker type for SHA-256 algorithm
pub enum Sha256Algorithm {}

impl HashAlgorithm for Sha256Algorithm {
    const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA256_BLOCK_SIZE;
    const ALGORITHM_ID: &'static str = "SHA-256";
}

/// One-shot SHA-256
pub struct Sha256;

impl Sha256 {
    /// Hash `data` in one call
    pub fn digest(data: &[u8]) -> Sha256Digest {
        let blocks = padding::split_blocks(&pad(data));
        Self::digest_blocks(&blocks)
    }

    /// Compress already parsed blocks starting from [`INITIAL_HASH`]
    pub fn digest_blocks(blocks: &[MessageBlock]) -> Sha256Digest {
        let hash = blocks
            .iter()
            .fold(INITIAL_HASH, |hash, block| compress_block(&hash, block));
        Sha256Digest::new(hash.to_bytes())
    }

    /// Hash `data` and return the lowercase hex digest
    pub fn hex_digest(data: &[u8]) -> String {
        Self::digest(data).to_hex()
    }
}
