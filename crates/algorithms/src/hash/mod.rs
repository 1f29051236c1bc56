//! Hash function implementations
//!
//! SHA-256 only, split into the padding, schedule and compression stages
//! the SHA-256 step controller walks through one at a time.

pub mod sha2;

pub use sha2::{Sha256, Sha256Algorithm};
pub use stepcrypt_api::HashAlgorithm;
