//! # stepcrypt
//!
//! Bit-exact AES-128 and SHA-256 exposed as single-step state machines, so
//! every internal transformation can be observed and replayed one operation
//! at a time.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! stepcrypt = "0.3"
//! ```
//!
//! ```
//! use stepcrypt::prelude::*;
//!
//! let mut aes = AesStepper::from_hex(b"Hello World!", "2b7e151628aed2a6abf7158809cf4f3c")?;
//! let first = aes.advance();
//! assert_eq!(first.operation, Some(AesOperation::SubBytes));
//! aes.run_to_completion();
//! assert_eq!(hex::encode(aes.ciphertext().unwrap()), "3852873fbef952fc1374337e790b5f81");
//!
//! let mut sha = Sha256Stepper::new(b"abc".to_vec());
//! sha.run_to_completion();
//! assert_eq!(sha.digest().unwrap(), Sha256::digest(b"abc"));
//! # Ok::<(), stepcrypt::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for value types and snapshots
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`stepcrypt-api`]: Error type and the `StepMachine`, `BlockCipher` and
//!   `HashAlgorithm` traits
//! - [`stepcrypt-params`]: Constants
//! - [`stepcrypt-algorithms`]: The engines, step controllers and avalanche tooling

pub use stepcrypt_algorithms as algorithms;
pub use stepcrypt_api as api;
pub use stepcrypt_params as params;

/// Common imports for stepcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{BlockCipher, HashAlgorithm, StepMachine};

    // Engines
    pub use crate::algorithms::{Aes128, Aes192, Aes256, Sha256};

    // Step controllers
    pub use crate::algorithms::step::{
        AesInput, AesOperation, AesSnapshot, AesStepper, Sha256Phase, Sha256Snapshot,
        Sha256Stepper,
    };

    // Value types
    pub use crate::algorithms::types::{
        Aes128Key, DiffMask, RegisterMask, Registers, Sha256Digest, StateMatrix,
    };

    // Avalanche analysis
    pub use crate::algorithms::avalanche::{avalanche_trials, hamming_distance, AvalancheReport};
}
