//! SHA-256 step controller
//!
//! Phases run `Idle → Padding → Scheduling → Compressing × 64 → …`. The
//! step after round 64 of a block folds the working registers into the
//! running hash, then either schedules the next block in the same step (the
//! snapshot reads `Scheduling`) or fixes the digest (`Complete`). A message
//! of `n` blocks therefore takes `2 + 65·n` steps.

use core::fmt;

use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use stepcrypt_api::StepMachine;
use stepcrypt_params::utils::hash::SHA256_ROUNDS;

use crate::hash::sha2::{
    expand, pad, padding::split_blocks, round, MessageBlock, MessageSchedule, INITIAL_HASH,
    K256,
};
use crate::types::{RegisterMask, Registers, Sha256Digest};

/// Where the SHA-256 machine is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sha256Phase {
    /// Reset, nothing computed
    Idle,
    /// Message padded and split into blocks
    Padding,
    /// Schedule computed for the current block, working registers loaded
    Scheduling,
    /// A compression round was just applied
    Compressing,
    /// Digest fixed
    Complete,
}

impl Sha256Phase {
    /// Display label
    pub fn name(&self) -> &'static str {
        match self {
            Sha256Phase::Idle => "idle",
            Sha256Phase::Padding => "padding",
            Sha256Phase::Scheduling => "scheduling",
            Sha256Phase::Compressing => "compressing",
            Sha256Phase::Complete => "complete",
        }
    }
}

impl fmt::Display for Sha256Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// View of the SHA-256 machine after a step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sha256Snapshot {
    /// Current phase
    pub phase: Sha256Phase,
    /// Index of the block being processed
    pub block_index: usize,
    /// Number of padded blocks, 0 until padding has run
    pub block_count: usize,
    /// Zero-based index of the round just applied, while compressing
    pub round: Option<usize>,
    /// Working registers a..h
    pub working: Registers,
    /// Working registers before this step
    pub previous_working: Registers,
    /// Registers whose value this step changed
    pub changed: RegisterMask,
    /// Running hash registers H0..H7
    pub hash: Registers,
    /// Steps applied since reset
    pub step: usize,
}

impl Sha256Snapshot {
    /// Whether the digest is fixed
    pub fn is_complete(&self) -> bool {
        self.phase == Sha256Phase::Complete
    }

    fn initial() -> Self {
        Sha256Snapshot {
            phase: Sha256Phase::Idle,
            block_index: 0,
            block_count: 0,
            round: None,
            working: INITIAL_HASH,
            previous_working: INITIAL_HASH,
            changed: RegisterMask::default(),
            hash: INITIAL_HASH,
            step: 0,
        }
    }
}

/// Single-step SHA-256
pub struct Sha256Stepper {
    message: Vec<u8>,
    padded: Vec<u8>,
    blocks: Vec<MessageBlock>,
    schedule: Option<MessageSchedule>,
    current: Sha256Snapshot,
}

impl Sha256Stepper {
    /// Start an idle machine over `message`
    pub fn new(message: impl Into<Vec<u8>>) -> Self {
        let message = message.into();
        debug!("SHA-256 stepper initialized over {} bytes", message.len());
        Sha256Stepper {
            message,
            padded: Vec::new(),
            blocks: Vec::new(),
            schedule: None,
            current: Sha256Snapshot::initial(),
        }
    }

    /// Unpadded input
    pub fn message(&self) -> &[u8] {
        &self.message
    }

    /// Padded stream, empty until the padding step
    pub fn padded(&self) -> &[u8] {
        &self.padded
    }

    /// Parsed blocks, empty until the padding step
    pub fn blocks(&self) -> &[MessageBlock] {
        &self.blocks
    }

    /// Schedule of the current block, once scheduled
    pub fn schedule(&self) -> Option<&MessageSchedule> {
        self.schedule.as_ref()
    }

    /// Round constant used by the round just applied
    pub fn round_constant(&self) -> Option<u32> {
        match self.current.phase {
            Sha256Phase::Compressing => self.current.round.map(|t| K256[t]),
            _ => None,
        }
    }

    /// Schedule word used by the round just applied
    pub fn schedule_word(&self) -> Option<u32> {
        match (self.current.phase, self.current.round, &self.schedule) {
            (Sha256Phase::Compressing, Some(t), Some(w)) => Some(w[t]),
            _ => None,
        }
    }

    /// Final digest, once complete
    pub fn digest(&self) -> Option<Sha256Digest> {
        self.current
            .is_complete()
            .then(|| Sha256Digest::new(self.current.hash.to_bytes()))
    }

    fn pad_message(&mut self) {
        self.padded = pad(&self.message);
        self.blocks = split_blocks(&self.padded);
        self.current.phase = Sha256Phase::Padding;
        self.current.block_count = self.blocks.len();
        self.current.changed = RegisterMask::default();
        debug!(
            "SHA-256 padded {} bytes into {} blocks",
            self.message.len(),
            self.blocks.len()
        );
    }

    // Load block `index`: expand its schedule and copy the hash into the
    // working registers.
    fn schedule_block(&mut self, index: usize) {
        self.schedule = Some(expand(&self.blocks[index]));
        self.load_working(self.current.hash);
        self.current.phase = Sha256Phase::Scheduling;
        self.current.block_index = index;
        self.current.round = None;
        debug!("SHA-256 scheduled block {}", index);
    }

    fn compress_round(&mut self, t: usize, w: &MessageSchedule) {
        let next = round(&self.current.working, w[t], K256[t]);
        self.load_working(next);
        self.current.phase = Sha256Phase::Compressing;
        self.current.round = Some(t);
        trace!(
            "SHA-256 block {} round {} changed [{}]",
            self.current.block_index,
            t,
            self.current.changed.names().collect::<String>()
        );
    }

    fn fold_block(&mut self) {
        self.current.hash = self.current.hash.wrapping_add(&self.current.working);
        debug!("SHA-256 folded block {}", self.current.block_index);

        let next = self.current.block_index + 1;
        if next < self.blocks.len() {
            self.schedule_block(next);
        } else {
            self.current.previous_working = self.current.working;
            self.current.changed = RegisterMask::default();
            self.current.phase = Sha256Phase::Complete;
            self.current.round = None;
            debug!("SHA-256 stepper complete after {} steps", self.current.step + 1);
        }
    }

    fn load_working(&mut self, next: Registers) {
        self.current.previous_working = self.current.working;
        self.current.changed = self.current.working.diff(&next);
        self.current.working = next;
    }
}

impl StepMachine for Sha256Stepper {
    type Input = Vec<u8>;
    type Snapshot = Sha256Snapshot;

    fn advance(&mut self) -> Sha256Snapshot {
        match (self.current.phase, self.current.round, self.schedule) {
            (Sha256Phase::Complete, _, _) => {
                debug!("SHA-256 stepper already complete; advance ignored");
                return self.current;
            }
            (Sha256Phase::Idle, _, _) => self.pad_message(),
            (Sha256Phase::Padding, _, _) => self.schedule_block(0),
            (Sha256Phase::Compressing, Some(t), _) if t + 1 == SHA256_ROUNDS => self.fold_block(),
            (Sha256Phase::Scheduling | Sha256Phase::Compressing, round, Some(w)) => {
                self.compress_round(round.map_or(0, |t| t + 1), &w)
            }
            // unreachable: a block is always scheduled before compressing
            (Sha256Phase::Scheduling | Sha256Phase::Compressing, _, None) => {
                return self.current;
            }
        }
        self.current.step += 1;
        self.current
    }

    fn reset(&mut self, input: Vec<u8>) {
        *self = Sha256Stepper::new(input);
    }

    fn is_complete(&self) -> bool {
        self.current.is_complete()
    }

    fn snapshot(&self) -> Sha256Snapshot {
        self.current
    }

    fn steps_taken(&self) -> usize {
        self.current.step
    }

    fn input(&self) -> &Vec<u8> {
        &self.message
    }
}

impl fmt::Debug for Sha256Stepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha256Stepper")
            .field("phase", &self.current.phase)
            .field("block_index", &self.current.block_index)
            .field("round", &self.current.round)
            .field("step", &self.current.step)
            .finish()
    }
}
