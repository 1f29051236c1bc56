//! Error handling for the stepcrypt engines

pub mod traits;
pub mod types;

pub use traits::ResultExt;
pub use types::{Error, Result};
