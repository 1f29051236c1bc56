//! AES-128 step controller
//!
//! The machine walks the ten rounds of AES-128 one transform per step:
//!
//! ```text
//! round 1..=9:  SubBytes → ShiftRows → MixColumns → AddRoundKey
//! round 10:     SubBytes → ShiftRows → AddRoundKey
//! ```
//!
//! Mixing the plaintext with round key 0 is not a step. It happens on
//! reset, so the freshly reset machine sits idle at round 1 with the
//! key-mixed matrix as its state and the raw plaintext as its previous
//! state. The whole cipher is 39 steps; the step applying round 10's
//! AddRoundKey leaves the ciphertext in the state matrix and completes the
//! machine.

use core::fmt;

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use stepcrypt_api::StepMachine;
use stepcrypt_params::utils::symmetric::{AES128_ROUNDS, AES_BLOCK_SIZE};

use crate::block::aes::{
    add_round_key, block_from_text, expand_key, mix_columns, shift_rows, sub_bytes,
    Aes128RoundKeys,
};
use crate::error::Result;
use crate::types::{Aes128Key, DiffMask, StateMatrix};

/// One of the four AES round transforms
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AesOperation {
    /// S-box substitution of every byte
    SubBytes,
    /// Cyclic left rotation of row `r` by `r`
    ShiftRows,
    /// Column mixing over GF(2⁸)
    MixColumns,
    /// XOR with the round key
    AddRoundKey,
}

impl AesOperation {
    /// Transforms in execution order for a full round
    pub const ALL: [AesOperation; 4] = [
        AesOperation::SubBytes,
        AesOperation::ShiftRows,
        AesOperation::MixColumns,
        AesOperation::AddRoundKey,
    ];

    /// FIPS-197 name of the transform
    pub fn name(&self) -> &'static str {
        match self {
            AesOperation::SubBytes => "SubBytes",
            AesOperation::ShiftRows => "ShiftRows",
            AesOperation::MixColumns => "MixColumns",
            AesOperation::AddRoundKey => "AddRoundKey",
        }
    }

    /// Apply this transform to `state`; `round_key` is used only by
    /// AddRoundKey.
    pub fn apply(&self, state: StateMatrix, round_key: &StateMatrix) -> StateMatrix {
        match self {
            AesOperation::SubBytes => sub_bytes(state),
            AesOperation::ShiftRows => shift_rows(state),
            AesOperation::MixColumns => mix_columns(state),
            AesOperation::AddRoundKey => add_round_key(state, round_key),
        }
    }

    /// The transform following this one within `round`, if any
    fn successor(&self, round: usize) -> Option<AesOperation> {
        match self {
            AesOperation::SubBytes => Some(AesOperation::ShiftRows),
            // final round omits column mixing
            AesOperation::ShiftRows if round == AES128_ROUNDS => Some(AesOperation::AddRoundKey),
            AesOperation::ShiftRows => Some(AesOperation::MixColumns),
            AesOperation::MixColumns => Some(AesOperation::AddRoundKey),
            AesOperation::AddRoundKey => None,
        }
    }
}

impl fmt::Display for AesOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Plaintext block and key the AES machine runs over
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AesInput {
    /// Plaintext block
    pub block: [u8; AES_BLOCK_SIZE],
    /// Cipher key
    pub key: Aes128Key,
}

impl AesInput {
    /// Wrap a block and key
    pub fn new(block: [u8; AES_BLOCK_SIZE], key: Aes128Key) -> Self {
        Self { block, key }
    }

    /// Truncate or zero-pad `text` to one block
    pub fn from_text(text: &[u8], key: Aes128Key) -> Self {
        Self::new(block_from_text(text), key)
    }

    /// Build from plaintext and a key given as 32 hex characters.
    ///
    /// The key is validated before anything is expanded.
    pub fn from_hex_key(text: &[u8], key_hex: &str) -> Result<Self> {
        let key = Aes128Key::from_hex(key_hex)?;
        Ok(Self::from_text(text, key))
    }
}

/// View of the AES machine after a step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AesSnapshot {
    /// Current round, 1 through 10
    pub round: usize,
    /// Transform just applied; `None` while idle at the start of round 1
    pub operation: Option<AesOperation>,
    /// State before the most recent transform
    pub previous: StateMatrix,
    /// State after the most recent transform
    pub state: StateMatrix,
    /// Cells that differ between `previous` and `state`
    pub diff: DiffMask,
    /// Steps applied since reset
    pub step: usize,
    /// Whether round 10's AddRoundKey has been applied
    pub complete: bool,
}

impl AesSnapshot {
    fn initial(plaintext: StateMatrix, round_key_0: &StateMatrix) -> Self {
        let state = add_round_key(plaintext, round_key_0);
        AesSnapshot {
            round: 1,
            operation: None,
            previous: plaintext,
            state,
            diff: plaintext.diff(&state),
            step: 0,
            complete: false,
        }
    }
}

/// Single-step AES-128 encryption
pub struct AesStepper {
    input: AesInput,
    round_keys: Aes128RoundKeys,
    current: AesSnapshot,
}

impl AesStepper {
    /// Expand the key and position the machine at round 1, idle
    pub fn new(input: AesInput) -> Self {
        let round_keys = expand_key(&input.key);
        let current = AesSnapshot::initial(StateMatrix::from_block(&input.block), &round_keys[0]);
        debug!("AES stepper initialized");
        AesStepper {
            input,
            round_keys,
            current,
        }
    }

    /// Build from plaintext and a hex key, rejecting malformed keys
    pub fn from_hex(text: &[u8], key_hex: &str) -> Result<Self> {
        AesInput::from_hex_key(text, key_hex).map(Self::new)
    }

    /// The eleven round keys, round 0 first
    pub fn round_keys(&self) -> &Aes128RoundKeys {
        &self.round_keys
    }

    /// Plaintext block the machine started from
    pub fn input_block(&self) -> &[u8; AES_BLOCK_SIZE] {
        &self.input.block
    }

    /// Round and transform the next `advance` will apply
    pub fn next_operation(&self) -> Option<(usize, AesOperation)> {
        if self.current.complete {
            return None;
        }
        let round = self.current.round;
        match self.current.operation {
            None => Some((round, AesOperation::SubBytes)),
            Some(op) => match op.successor(round) {
                Some(next) => Some((round, next)),
                None => Some((round + 1, AesOperation::SubBytes)),
            },
        }
    }

    /// The ciphertext, once the machine is complete
    pub fn ciphertext(&self) -> Option<[u8; AES_BLOCK_SIZE]> {
        self.current.complete.then(|| self.current.state.to_block())
    }
}

impl StepMachine for AesStepper {
    type Input = AesInput;
    type Snapshot = AesSnapshot;

    fn advance(&mut self) -> AesSnapshot {
        let (round, operation) = match self.next_operation() {
            Some(next) => next,
            None => {
                debug!("AES stepper already complete; advance ignored");
                return self.current;
            }
        };

        let previous = self.current.state;
        let state = operation.apply(previous, &self.round_keys[round]);
        let complete = round == AES128_ROUNDS && operation == AesOperation::AddRoundKey;

        self.current = AesSnapshot {
            round,
            operation: Some(operation),
            previous,
            state,
            diff: previous.diff(&state),
            step: self.current.step + 1,
            complete,
        };

        trace!(
            "AES step {}: round {} {} changed {} cells",
            self.current.step,
            round,
            operation,
            self.current.diff.count()
        );
        if complete {
            debug!("AES stepper complete after {} steps", self.current.step);
        }

        self.current
    }

    fn reset(&mut self, input: AesInput) {
        *self = AesStepper::new(input);
    }

    fn is_complete(&self) -> bool {
        self.current.complete
    }

    fn snapshot(&self) -> AesSnapshot {
        self.current
    }

    fn steps_taken(&self) -> usize {
        self.current.step
    }

    fn input(&self) -> &AesInput {
        &self.input
    }
}

impl fmt::Debug for AesStepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesStepper")
            .field("round", &self.current.round)
            .field("operation", &self.current.operation)
            .field("step", &self.current.step)
            .field("complete", &self.current.complete)
            .finish()
    }
}
