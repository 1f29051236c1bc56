//! Avalanche analysis for SHA-256
//!
//! Observational tooling only: it hashes messages that differ in a single
//! bit and counts how many digest bits flip. A well-behaved hash flips
//! about half of its 256 output bits.
//!
//! Bit `i` of a byte string is bit `7 - i % 8` of byte `i / 8`, the same
//! most-significant-first order [`to_bit_string`] prints.

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use stepcrypt_params::utils::hash::SHA256_OUTPUT_BITS;

use crate::error::{validate, Error, Result};
use crate::hash::Sha256;

/// Render bytes as '0'/'1' characters, most significant bit first
pub fn to_bit_string(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:08b}", b)).collect()
}

/// Count positions at which two equal-length bit strings differ
pub fn hamming_distance(a: &str, b: &str) -> Result<usize> {
    validate::length("bit string", b.len(), a.len())?;

    a.bytes().zip(b.bytes()).try_fold(0usize, |acc, (x, y)| {
        if !is_bit(x) || !is_bit(y) {
            return Err(Error::param("bit string", "only '0' and '1' are allowed"));
        }
        Ok(acc + usize::from(x != y))
    })
}

/// Count differing bits between two equal-length byte strings
pub fn hamming_distance_bytes(a: &[u8], b: &[u8]) -> Result<usize> {
    validate::length("byte string", b.len(), a.len())?;
    Ok(a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x ^ y).count_ones() as usize)
        .sum())
}

/// Copy of `bytes` with bit `bit` inverted
pub fn flip_bit(bytes: &[u8], bit: usize) -> Result<Vec<u8>> {
    validate::parameter(!bytes.is_empty(), "bytes", "nothing to flip")?;
    validate::max_length("bit index", bit, bytes.len() * 8 - 1)?;
    let mut out = bytes.to_vec();
    out[bit / 8] ^= 0x80 >> (bit % 8);
    Ok(out)
}

/// Digest bits flipped by inverting input bit `bit` of `message`
pub fn avalanche(message: &[u8], bit: usize) -> Result<usize> {
    let flipped = flip_bit(message, bit)?;
    hamming_distance_bytes(
        Sha256::digest(message).as_ref(),
        Sha256::digest(&flipped).as_ref(),
    )
}

/// Summary of repeated single-bit avalanche trials
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AvalancheReport {
    /// Number of trials run
    pub trials: usize,
    /// Mean number of flipped output bits
    pub mean: f64,
    /// Fewest flipped output bits seen
    pub min: usize,
    /// Most flipped output bits seen
    pub max: usize,
}

impl AvalancheReport {
    /// Mean flipped bits as a fraction of the 256-bit digest
    pub fn mean_fraction(&self) -> f64 {
        self.mean / SHA256_OUTPUT_BITS as f64
    }
}

/// Hash `trials` random messages of `message_len` bytes against a copy
/// with one random bit flipped
pub fn avalanche_trials<R: Rng + ?Sized>(
    rng: &mut R,
    message_len: usize,
    trials: usize,
) -> Result<AvalancheReport> {
    validate::parameter(message_len > 0, "message_len", "must be at least one byte")?;
    validate::parameter(trials > 0, "trials", "must be positive")?;

    let mut message = vec![0u8; message_len];
    let mut total = 0usize;
    let mut min = usize::MAX;
    let mut max = 0usize;

    for _ in 0..trials {
        rng.fill(message.as_mut_slice());
        let bit = rng.gen_range(0..message_len * 8);
        let distance = avalanche(&message, bit)?;
        total += distance;
        min = min.min(distance);
        max = max.max(distance);
    }

    Ok(AvalancheReport {
        trials,
        mean: total as f64 / trials as f64,
        min,
        max,
    })
}

#[inline]
fn is_bit(c: u8) -> bool {
    c == b'0' || c == b'1'
}
