//! Public API traits and types for the stepcrypt engines
//!
//! This crate defines the error type shared by every stepcrypt crate and the
//! traits the algorithm implementations are written against. The most
//! important of these is [`StepMachine`], the one-operation-at-a-time
//! execution contract.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod traits;

pub use error::{Error, Result, ResultExt};
pub use traits::{BlockCipher, HashAlgorithm, StepMachine};
