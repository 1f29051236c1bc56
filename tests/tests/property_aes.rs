//! Property-based tests for AES-128 and its step controller

use proptest::prelude::*;
use stepcrypt_algorithms::block::aes::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes, Aes128, Aes192, Aes256,
};
use stepcrypt_algorithms::block::{block_from_text, BlockCipher};
use stepcrypt_algorithms::step::{AesInput, AesOperation, AesStepper, StepMachine};
use stepcrypt_algorithms::types::{Aes128Key, Aes192Key, Aes256Key, StateMatrix};

proptest! {
    #[test]
    fn stepped_matches_batch(key in any::<[u8; 16]>(), pt in any::<[u8; 16]>()) {
        let key = Aes128Key::new(key);
        let expected = Aes128::new(&key).encrypt(&pt);

        let mut stepper = AesStepper::new(AesInput::new(pt, key));
        let terminal = stepper.run_to_completion();
        prop_assert!(terminal.complete);
        prop_assert_eq!(terminal.step, 39);
        prop_assert_eq!(terminal.state.to_block(), expected);
        prop_assert_eq!(stepper.ciphertext(), Some(expected));
    }

    #[test]
    fn aes128_roundtrip(key in any::<[u8; 16]>(), pt in any::<[u8; 16]>()) {
        let cipher = Aes128::new(&Aes128Key::new(key));
        prop_assert_eq!(cipher.decrypt(&cipher.encrypt(&pt)), pt);
    }

    #[test]
    fn aes192_roundtrip(key in any::<[u8; 24]>(), pt in any::<[u8; 16]>()) {
        let cipher = Aes192::new(&Aes192Key::new(key));
        let mut block = pt;
        cipher.encrypt_block(&mut block).unwrap();
        cipher.decrypt_block(&mut block).unwrap();
        prop_assert_eq!(block, pt);
    }

    #[test]
    fn aes256_roundtrip(key in any::<[u8; 32]>(), pt in any::<[u8; 16]>()) {
        let cipher = Aes256::new(&Aes256Key::new(key));
        let mut block = pt;
        cipher.encrypt_block(&mut block).unwrap();
        cipher.decrypt_block(&mut block).unwrap();
        prop_assert_eq!(block, pt);
    }

    #[test]
    fn transforms_invert(bytes in any::<[u8; 16]>(), key in any::<[u8; 16]>()) {
        let m = StateMatrix::from_block(&bytes);
        let k = StateMatrix::from_block(&key);
        prop_assert_eq!(inv_sub_bytes(sub_bytes(m)), m);
        prop_assert_eq!(inv_shift_rows(shift_rows(m)), m);
        prop_assert_eq!(inv_mix_columns(mix_columns(m)), m);
        prop_assert_eq!(add_round_key(add_round_key(m, &k), &k), m);
    }

    #[test]
    fn diff_mask_is_exact(key in any::<[u8; 16]>(), pt in any::<[u8; 16]>(), steps in 0usize..45) {
        let mut stepper = AesStepper::new(AesInput::new(pt, Aes128Key::new(key)));
        let snap = stepper.seek(steps);
        prop_assert_eq!(snap.step, steps.min(39));
        prop_assert_eq!(snap.diff, snap.previous.diff(&snap.state));
        if snap.operation == Some(AesOperation::ShiftRows) {
            for c in 0..4 {
                prop_assert!(!snap.diff.is_changed(0, c));
            }
        }
    }

    #[test]
    fn advance_after_complete_is_idempotent(key in any::<[u8; 16]>(), extra in 1usize..5) {
        let mut stepper = AesStepper::new(AesInput::new(block_from_text(b"Hello World!"), Aes128Key::new(key)));
        let terminal = stepper.run_to_completion();
        for _ in 0..extra {
            prop_assert_eq!(stepper.advance(), terminal);
        }
    }

    #[test]
    fn block_from_text_pads_or_truncates(text in prop::collection::vec(any::<u8>(), 0..40)) {
        let block = block_from_text(&text);
        let n = text.len().min(16);
        prop_assert_eq!(&block[..n], &text[..n]);
        prop_assert!(block[n..].iter().all(|&b| b == 0));
    }
}
