//! Value types shared by the engines
//!
//! Everything here is a small fixed-size structure passed by value, so a
//! step can hand out the state before and after a transform without heap
//! traffic.

pub mod digest;
pub mod key;
pub mod matrix;
pub mod registers;

pub use digest::{Digest, Sha256Digest};
pub use key::{Aes128Key, Aes192Key, Aes256Key, AesKey};
pub use matrix::{DiffMask, StateMatrix};
pub use registers::{RegisterMask, Registers, REGISTER_NAMES};
