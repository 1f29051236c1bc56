use stepcrypt_algorithms::{
    avalanche::flip_bit,
    hamming_distance,
    step::{AesStepper, Sha256Phase, Sha256Stepper, StepMachine},
};

fn main() -> stepcrypt_algorithms::Result<()> {
    env_logger::init();

    // AES-128: one transform per step
    let mut aes = AesStepper::from_hex(b"Hello World!", "2b7e151628aed2a6abf7158809cf4f3c")?;
    println!("round 1, idle (key-mixed plaintext):\n{}\n", aes.snapshot().state);
    while !aes.is_complete() {
        let snap = aes.advance();
        if let Some(op) = snap.operation {
            println!(
                "step {:2}  round {:2}  {:<11}  {:2} cells changed  {}",
                snap.step,
                snap.round,
                op,
                snap.diff.count(),
                snap.state.to_hex()
            );
        }
    }
    if let Some(ct) = aes.ciphertext() {
        println!("ciphertext: {}\n", hex::encode(ct));
    }

    // SHA-256: phase changes and one compression round per step
    let mut sha = Sha256Stepper::new(b"Hello World!".to_vec());
    while !sha.is_complete() {
        let snap = sha.advance();
        match snap.phase {
            Sha256Phase::Compressing => {
                let changed: String = snap.changed.names().collect();
                println!(
                    "block {} round {:2}  changed [{}]",
                    snap.block_index,
                    snap.round.unwrap_or(0),
                    changed
                );
            }
            phase => println!("{}", phase),
        }
    }
    let digest = sha.digest();
    if let Some(digest) = digest {
        println!("digest: {}", digest);

        // Avalanche: flip the last input bit
        let mut flipped = Sha256Stepper::new(flip_bit(b"Hello World!", 95)?);
        flipped.run_to_completion();
        if let Some(other) = flipped.digest() {
            let distance = hamming_distance(&digest.to_bit_string(), &other.to_bit_string())?;
            println!("one input bit flipped {} of 256 output bits", distance);
        }
    }
    Ok(())
}
