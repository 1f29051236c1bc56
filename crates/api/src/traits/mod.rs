//! Traits implemented by the stepcrypt engines

pub mod cipher;
pub mod hash;
pub mod step;

pub use cipher::BlockCipher;
pub use hash::HashAlgorithm;
pub use step::StepMachine;
