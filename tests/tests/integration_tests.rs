//! Stepped engines against the batch references and known answers

use stepcrypt::prelude::*;
use stepcrypt_algorithms::block::aes::{expand_key, Aes128RoundKeys};
use stepcrypt_params::utils::symmetric::AES128_TOTAL_STEPS;
use stepcrypt_tests::init_logging;
use stepcrypt_tests::vectors::{AES128_VECTORS, SHA256_VECTORS};

fn block(hex_str: &str) -> [u8; 16] {
    hex::decode(hex_str).unwrap().try_into().unwrap()
}

#[test]
fn aes128_vectors_batch_and_stepped() {
    init_logging();
    for v in AES128_VECTORS {
        let key = Aes128Key::from_hex(v.key).unwrap();
        let pt = block(v.plaintext);

        let cipher = Aes128::new(&key);
        assert_eq!(hex::encode(cipher.encrypt(&pt)), v.ciphertext);
        assert_eq!(cipher.decrypt(&block(v.ciphertext)), pt);

        let mut stepper = AesStepper::new(AesInput::new(pt, key));
        let terminal = stepper.run_to_completion();
        assert_eq!(terminal.step, AES128_TOTAL_STEPS);
        assert_eq!(terminal.state.to_hex(), v.ciphertext);
        assert_eq!(stepper.round_keys(), &expand_key(&Aes128Key::from_hex(v.key).unwrap()));
    }
}

#[test]
fn sha256_vectors_batch_and_stepped() {
    init_logging();
    for v in SHA256_VECTORS {
        assert_eq!(Sha256::digest(v.message).to_hex(), v.digest);

        let mut stepper = Sha256Stepper::new(v.message);
        let terminal = stepper.run_to_completion();
        assert_eq!(stepper.digest().unwrap().to_hex(), v.digest);
        assert_eq!(hex::encode(terminal.hash.to_bytes()), v.digest);
        assert_eq!(terminal.step, 2 + 65 * terminal.block_count);
    }
}

#[test]
fn aes_snapshots_replay_identically() {
    let key = Aes128Key::from_hex("2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let input = AesInput::from_text(b"Hello World!", key);

    let mut a = AesStepper::new(input.clone());
    let mut b = AesStepper::new(input);
    let trace_a: Vec<AesSnapshot> = (0..39).map(|_| a.advance()).collect();
    let trace_b: Vec<AesSnapshot> = (0..39).map(|_| b.advance()).collect();
    assert_eq!(trace_a, trace_b);

    // every intermediate state is reachable again by seeking
    for (i, snap) in trace_a.iter().enumerate() {
        assert_eq!(&a.seek(i + 1), snap);
    }
}

#[test]
fn aes_each_step_applies_one_transform() {
    let key = Aes128Key::from_hex("000102030405060708090a0b0c0d0e0f").unwrap();
    let mut stepper = AesStepper::new(AesInput::new(
        block("00112233445566778899aabbccddeeff"),
        key.clone(),
    ));
    let keys = expand_key(&key);

    while !stepper.is_complete() {
        let snap = stepper.advance();
        let op = snap.operation.unwrap();
        assert_eq!(op.apply(snap.previous, &keys[snap.round]), snap.state);
    }
}

#[test]
fn sha256_machines_are_independent() {
    let mut a = Sha256Stepper::new(b"abc".to_vec());
    let mut b = Sha256Stepper::new(b"abd".to_vec());
    for _ in 0..30 {
        a.advance();
    }
    assert_eq!(b.steps_taken(), 0);
    b.run_to_completion();
    a.run_to_completion();
    assert_ne!(a.digest(), b.digest());
    assert_eq!(a.digest().unwrap(), Sha256::digest(b"abc"));
}

#[test]
fn snapshots_serialize_to_json() {
    let mut aes = AesStepper::from_hex(b"Hello World!", "2b7e151628aed2a6abf7158809cf4f3c").unwrap();
    let snap = aes.advance();
    let json = serde_json::to_string(&snap).unwrap();
    let back: AesSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);

    let json = serde_json::to_string(aes.round_keys()).unwrap();
    let back: Aes128RoundKeys = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, aes.round_keys());
    assert_eq!(back.len(), 11);

    let mut short: serde_json::Value = serde_json::from_str(&json).unwrap();
    short.as_array_mut().unwrap().pop();
    assert!(serde_json::from_value::<Aes128RoundKeys>(short).is_err());

    let mut sha = Sha256Stepper::new(b"abc".to_vec());
    let snap = sha.seek(5);
    let json = serde_json::to_string(&snap).unwrap();
    let back: Sha256Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);

    let digest = Sha256::digest(b"abc");
    let json = serde_json::to_string(&digest).unwrap();
    assert_eq!(
        json,
        "\"ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\""
    );
    let back: Sha256Digest = serde_json::from_str(&json).unwrap();
    assert_eq!(back, digest);
}

#[test]
fn malformed_key_is_reported_not_truncated() {
    let err = AesStepper::from_hex(b"x", "2b7e151628aed2a6abf7158809cf4f3g").unwrap_err();
    match err {
        Error::InvalidKey { .. } => {}
        other => panic!("unexpected error: {}", other),
    }
    let err = Aes128Key::from_hex("2b7e").unwrap_err();
    assert!(err.to_string().contains("invalid length"));
}
