//! Error type definitions for the stepcrypt engines

use thiserror::Error;

/// Result type for stepcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

/// Error type for stepcrypt operations
///
/// The algorithms themselves are total over well-formed input, so every
/// variant describes input that was rejected before any work began.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        /// Where the length check failed
        context: &'static str,
        /// Required length
        expected: usize,
        /// Supplied length
        actual: usize,
    },

    /// Key material that could not be decoded
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        /// Which key was being parsed
        context: &'static str,
        /// Decoder diagnostic
        message: String,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        /// Name of the offending parameter
        context: &'static str,
        /// Why it was rejected
        message: String,
    },
}

impl Error {
    /// Shorthand to create an `InvalidParameter` error
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }
}

impl From<hex::FromHexError> for Error {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::InvalidHexCharacter { c, index } => Error::InvalidKey {
                context: "hex decoding",
                message: format!("invalid character {:?} at position {}", c, index),
            },
            hex::FromHexError::OddLength => Error::InvalidKey {
                context: "hex decoding",
                message: "odd number of hex digits".to_string(),
            },
            hex::FromHexError::InvalidStringLength => Error::InvalidKey {
                context: "hex decoding",
                message: "hex string does not match the expected byte length".to_string(),
            },
        }
    }
}
