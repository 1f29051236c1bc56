//! Single-step controllers
//!
//! Each controller wraps one engine in a [`StepMachine`]: every call to
//! `advance` applies exactly one AES transform or one SHA-256 phase change
//! or compression round, and returns a complete snapshot of the machine.
//! Snapshots are plain values, so a caller can keep as many as it likes
//! for display or comparison.
//!
//! Stepping only moves forward. To go back, restart from the stored input
//! and replay, which [`StepMachine::seek`] does.

pub mod aes;
pub mod sha256;

pub use aes::{AesInput, AesOperation, AesSnapshot, AesStepper};
pub use sha256::{Sha256Phase, Sha256Snapshot, Sha256Stepper};
pub use stepcrypt_api::StepMachine;
