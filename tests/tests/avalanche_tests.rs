//! Avalanche behaviour of SHA-256 over seeded random inputs

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stepcrypt::prelude::*;
use stepcrypt_algorithms::avalanche::{avalanche, flip_bit, hamming_distance_bytes};

#[test]
fn one_bit_flip_changes_about_half() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    for len in [1, 12, 55, 56, 64, 200] {
        let report = avalanche_trials(&mut rng, len, 48).unwrap();
        assert!(
            report.mean > 100.0 && report.mean < 156.0,
            "len {}: mean {}",
            len,
            report.mean
        );
        assert!(report.min > 0);
    }
}

#[test]
fn stepped_digests_feed_the_analyzer() {
    let mut a = Sha256Stepper::new(b"Hello World!".to_vec());
    let mut b = Sha256Stepper::new(flip_bit(b"Hello World!", 95).unwrap());
    a.run_to_completion();
    b.run_to_completion();
    let bits_a = a.digest().unwrap().to_bit_string();
    let bits_b = b.digest().unwrap().to_bit_string();
    assert_eq!(hamming_distance(&bits_a, &bits_b).unwrap(), 125);
}

proptest! {
    #[test]
    fn distance_is_a_metric(a in any::<[u8; 32]>(), b in any::<[u8; 32]>(), c in any::<[u8; 32]>()) {
        let ab = hamming_distance_bytes(&a, &b).unwrap();
        let ba = hamming_distance_bytes(&b, &a).unwrap();
        let bc = hamming_distance_bytes(&b, &c).unwrap();
        let ac = hamming_distance_bytes(&a, &c).unwrap();
        prop_assert_eq!(ab, ba);
        prop_assert!(ac <= ab + bc);
        prop_assert_eq!(hamming_distance_bytes(&a, &a).unwrap(), 0);
    }

    #[test]
    fn flipping_twice_restores(msg in prop::collection::vec(any::<u8>(), 1..64), seed in any::<usize>()) {
        let bit = seed % (msg.len() * 8);
        let once = flip_bit(&msg, bit).unwrap();
        prop_assert_eq!(hamming_distance_bytes(&msg, &once).unwrap(), 1);
        prop_assert_eq!(flip_bit(&once, bit).unwrap(), msg.clone());
        prop_assert!(avalanche(&msg, bit).unwrap() > 0);
    }
}
