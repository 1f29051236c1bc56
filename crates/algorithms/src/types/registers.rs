//! Eight-word SHA-256 register files
//!
//! The same type holds both the running hash registers (H0..H7) and the
//! working registers a..h of the compression function.

use core::fmt;
use core::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conventional labels of the working registers, in storage order
pub const REGISTER_NAMES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Eight 32-bit registers
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Registers {
    words: [u32; 8],
}

impl Registers {
    /// Wrap eight words
    pub const fn new(words: [u32; 8]) -> Self {
        Self { words }
    }

    /// All eight words
    pub fn words(&self) -> &[u32; 8] {
        &self.words
    }

    /// Register a
    pub fn a(&self) -> u32 {
        self.words[0]
    }
    /// Register b
    pub fn b(&self) -> u32 {
        self.words[1]
    }
    /// Register c
    pub fn c(&self) -> u32 {
        self.words[2]
    }
    /// Register d
    pub fn d(&self) -> u32 {
        self.words[3]
    }
    /// Register e
    pub fn e(&self) -> u32 {
        self.words[4]
    }
    /// Register f
    pub fn f(&self) -> u32 {
        self.words[5]
    }
    /// Register g
    pub fn g(&self) -> u32 {
        self.words[6]
    }
    /// Register h
    pub fn h(&self) -> u32 {
        self.words[7]
    }

    /// Word-wise modular sum, used to fold working registers into the hash
    pub fn wrapping_add(&self, other: &Registers) -> Registers {
        let mut words = self.words;
        for (w, &o) in words.iter_mut().zip(other.words.iter()) {
            *w = w.wrapping_add(o);
        }
        Registers { words }
    }

    /// Which registers hold a different value in `other`
    pub fn diff(&self, other: &Registers) -> RegisterMask {
        let mut changed = [false; 8];
        for (i, flag) in changed.iter_mut().enumerate() {
            *flag = self.words[i] != other.words[i];
        }
        RegisterMask { changed }
    }

    /// Big-endian serialization of the eight words
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        for (chunk, word) in out.chunks_exact_mut(4).zip(self.words.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        out
    }
}

impl Index<usize> for Registers {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.words[index]
    }
}

impl From<[u32; 8]> for Registers {
    fn from(words: [u32; 8]) -> Self {
        Self { words }
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, word) in REGISTER_NAMES.iter().zip(self.words.iter()) {
            map.entry(name, &format_args!("{:08x}", word));
        }
        map.finish()
    }
}

/// Flags for which of the eight registers changed in a step
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegisterMask {
    changed: [bool; 8],
}

impl RegisterMask {
    /// Whether register `index` (0 = a) changed
    pub fn is_changed(&self, index: usize) -> bool {
        self.changed[index]
    }

    /// Number of changed registers
    pub fn count(&self) -> usize {
        self.changed.iter().filter(|&&c| c).count()
    }

    /// Labels of the changed registers
    pub fn names(&self) -> impl Iterator<Item = char> + '_ {
        REGISTER_NAMES
            .iter()
            .zip(self.changed.iter())
            .filter(|&(_, &c)| c)
            .map(|(&n, _)| n)
    }
}
