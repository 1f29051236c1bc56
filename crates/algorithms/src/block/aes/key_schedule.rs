//! AES key expansion
//!
//! The cipher key is split into `Nk` big-endian words and stretched to
//! `4 · (Nr + 1)` words. Every `Nk`-th word passes through RotWord, SubWord
//! and a round constant before being XORed with the word `Nk` positions
//! back; AES-256 additionally substitutes the word halfway between. Each run
//! of four words becomes one round-key matrix, word `j` supplying column `j`.

use core::ops::Index;
use zeroize::{Zeroize, ZeroizeOnDrop};

use stepcrypt_params::utils::symmetric::{
    AES128_KEY_SIZE, AES128_ROUND_KEYS, AES_STATE_DIM,
};

use crate::types::{AesKey, StateMatrix};

use super::tables::{rot_word, sub_word, RCON};

/// The ordered set of round-key matrices produced by the key schedule
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys<const R: usize> {
    keys: [StateMatrix; R],
}

/// Round keys of AES-128 (rounds 0 through 10)
pub type Aes128RoundKeys = RoundKeys<AES128_ROUND_KEYS>;

impl<const R: usize> RoundKeys<R> {
    /// Round key for `round`
    ///
    /// # Panics
    ///
    /// If `round >= R`.
    pub fn get(&self, round: usize) -> &StateMatrix {
        &self.keys[round]
    }

    /// Number of round keys
    pub const fn len(&self) -> usize {
        R
    }

    /// Always false for a real schedule
    pub const fn is_empty(&self) -> bool {
        R == 0
    }

    /// Round keys as a slice, round 0 first
    pub fn as_slice(&self) -> &[StateMatrix] {
        &self.keys
    }

    /// Round keys in schedule order
    pub fn iter(&self) -> core::slice::Iter<'_, StateMatrix> {
        self.keys.iter()
    }

    /// Round keys in block form, concatenated
    pub fn to_bytes(&self) -> Vec<u8> {
        self.keys.iter().flat_map(|k| k.to_block()).collect()
    }
}

impl<const R: usize> Index<usize> for RoundKeys<R> {
    type Output = StateMatrix;

    fn index(&self, round: usize) -> &StateMatrix {
        &self.keys[round]
    }
}

impl<const R: usize> core::fmt::Debug for RoundKeys<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "RoundKeys<{}>([REDACTED])", R)
    }
}

#[cfg(feature = "serde")]
impl<const R: usize> serde::Serialize for RoundKeys<R> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

#[cfg(feature = "serde")]
impl<'de, const R: usize> serde::Deserialize<'de> for RoundKeys<R> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let keys = <Vec<StateMatrix> as serde::Deserialize>::deserialize(deserializer)?;
        let len = keys.len();
        let keys: [StateMatrix; R] = keys.try_into().map_err(|mut rejected: Vec<StateMatrix>| {
            rejected.zeroize();
            <D::Error as serde::de::Error>::invalid_length(len, &"one matrix per round key")
        })?;
        Ok(Self { keys })
    }
}

/// Expand a 128-bit key into its 11 round-key matrices
pub fn expand_key(key: &AesKey<AES128_KEY_SIZE>) -> Aes128RoundKeys {
    expand::<AES128_KEY_SIZE, AES128_ROUND_KEYS>(key)
}

/// Expand an `N`-byte key into `R` round keys.
///
/// `N` must be 16, 24 or 32 and `R` the matching `Nr + 1`; the concrete
/// ciphers only instantiate those pairs.
pub(crate) fn expand<const N: usize, const R: usize>(key: &AesKey<N>) -> RoundKeys<R> {
    let nk = N / 4;
    let total = R * AES_STATE_DIM;
    let bytes = key.as_bytes();

    let mut words = vec![0u32; total];
    for (i, word) in words.iter_mut().take(nk).enumerate() {
        *word = u32::from_be_bytes([
            bytes[4 * i],
            bytes[4 * i + 1],
            bytes[4 * i + 2],
            bytes[4 * i + 3],
        ]);
    }

    for i in nk..total {
        let mut temp = words[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ RCON[i / nk];
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        words[i] = words[i - nk] ^ temp;
    }

    let mut keys = [StateMatrix::default(); R];
    for (round, key) in keys.iter_mut().enumerate() {
        for col in 0..AES_STATE_DIM {
            key.set_column(col, words[round * AES_STATE_DIM + col].to_be_bytes());
        }
    }
    words.zeroize();

    RoundKeys { keys }
}
