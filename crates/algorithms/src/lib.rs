//! Bit-exact AES and SHA-256 with single-step execution
//!
//! This crate implements AES (FIPS 197) and SHA-256 (FIPS 180-4) from
//! first principles, with every internal stage exposed as a plain function
//! over plain values:
//!
//! - [`gf`]: arithmetic in GF(2⁸)
//! - [`block::aes`]: S-box, key schedule, the four round transforms and
//!   batch AES-128/192/256
//! - [`hash::sha2`]: padding, block parsing, schedule expansion, the
//!   compression round and batch SHA-256
//! - [`step`]: state machines that run AES-128 and SHA-256 one transform or
//!   round per call, producing a complete snapshot after each step
//! - [`avalanche`]: Hamming-distance tooling for single-bit input flips
//!
//! The batch implementations are the reference the step controllers are
//! checked against. None of this is hardened against side channels.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Finite field arithmetic
pub mod gf;

// Value types
pub mod types;
pub use types::{
    Aes128Key, Aes192Key, Aes256Key, AesKey, DiffMask, Digest, RegisterMask, Registers,
    Sha256Digest, StateMatrix,
};

// Block cipher implementations
pub mod block;
pub use block::{Aes128, Aes192, Aes256, BlockCipher};

// Hash function implementations
pub mod hash;
pub use hash::{HashAlgorithm, Sha256, Sha256Algorithm};

// Step controllers
pub mod step;
pub use step::{
    AesInput, AesOperation, AesSnapshot, AesStepper, Sha256Phase, Sha256Snapshot, Sha256Stepper,
    StepMachine,
};

// Avalanche analysis
pub mod avalanche;
pub use avalanche::{avalanche_trials, hamming_distance, AvalancheReport};
