//! Error handling for the algorithm implementations
//!
//! The error type itself lives in `stepcrypt-api`; this module re-exports it
//! and provides the validation helpers used at every input boundary.

pub use stepcrypt_api::error::{Error, Result, ResultExt};

pub mod validate;
