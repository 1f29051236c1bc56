//! Property-based tests for SHA-256 and its step controller

use proptest::prelude::*;
use stepcrypt_algorithms::hash::sha2::{pad, padded_len, parse_blocks};
use stepcrypt_algorithms::hash::Sha256;
use stepcrypt_algorithms::step::{Sha256Phase, Sha256Stepper, StepMachine};

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..300)
}

proptest! {
    #[test]
    fn padding_invariants(msg in message()) {
        let padded = pad(&msg);
        prop_assert_eq!(padded.len() % 64, 0);
        prop_assert_eq!(padded.len(), padded_len(msg.len()));
        prop_assert!(padded.len() >= msg.len() + 9);
        prop_assert!(padded.len() < msg.len() + 9 + 64);
        prop_assert_eq!(&padded[..msg.len()], &msg[..]);
        prop_assert_eq!(padded[msg.len()], 0x80);

        let tail = padded.len() - 8;
        prop_assert!(padded[msg.len() + 1..tail].iter().all(|&b| b == 0));
        let mut length = [0u8; 8];
        length.copy_from_slice(&padded[tail..]);
        prop_assert_eq!(u64::from_be_bytes(length), msg.len() as u64 * 8);
    }

    #[test]
    fn parse_counts_blocks(msg in message()) {
        let padded = pad(&msg);
        let blocks = parse_blocks(&padded).unwrap();
        prop_assert_eq!(blocks.len(), padded.len() / 64);
        let first = u32::from_be_bytes([padded[0], padded[1], padded[2], padded[3]]);
        prop_assert_eq!(blocks[0][0], first);
    }

    #[test]
    fn stepped_matches_batch(msg in message()) {
        let expected = Sha256::digest(&msg);
        let mut stepper = Sha256Stepper::new(msg.clone());
        let terminal = stepper.run_to_completion();
        prop_assert_eq!(terminal.phase, Sha256Phase::Complete);
        prop_assert_eq!(terminal.step, 2 + 65 * terminal.block_count);
        prop_assert_eq!(stepper.digest(), Some(expected));
    }

    #[test]
    fn changed_mask_is_exact(msg in message(), steps in 0usize..200) {
        let mut stepper = Sha256Stepper::new(msg);
        let snap = stepper.seek(steps);
        for i in 0..8 {
            prop_assert_eq!(snap.changed.is_changed(i), snap.previous_working[i] != snap.working[i]);
        }
    }

    #[test]
    fn advance_after_complete_is_idempotent(msg in message(), extra in 1usize..5) {
        let mut stepper = Sha256Stepper::new(msg);
        let terminal = stepper.run_to_completion();
        for _ in 0..extra {
            prop_assert_eq!(stepper.advance(), terminal);
        }
        prop_assert_eq!(stepper.steps_taken(), terminal.step);
    }
}
