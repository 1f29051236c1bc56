//! Block cipher implementations
//!
//! Only AES is provided. The batch ciphers here are the reference the AES
//! step controller is validated against.

pub mod aes;

pub use aes::{block_from_text, Aes128, Aes192, Aes256};
pub use stepcrypt_api::BlockCipher;
