//! Constants for the AES block cipher

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Rows (and columns) of the AES state matrix
pub const AES_STATE_DIM: usize = 4;

/// Number of rounds for AES-128
pub const AES128_ROUNDS: usize = 10;

/// Number of rounds for AES-192
pub const AES192_ROUNDS: usize = 12;

/// Number of rounds for AES-256
pub const AES256_ROUNDS: usize = 14;

/// Round keys produced by the AES-128 key schedule (rounds 0 to 10)
pub const AES128_ROUND_KEYS: usize = AES128_ROUNDS + 1;

/// Round keys produced by the AES-192 key schedule
pub const AES192_ROUND_KEYS: usize = AES192_ROUNDS + 1;

/// Round keys produced by the AES-256 key schedule
pub const AES256_ROUND_KEYS: usize = AES256_ROUNDS + 1;

/// Reduction byte of the AES field polynomial x^8 + x^4 + x^3 + x + 1
pub const AES_REDUCTION_BYTE: u8 = 0x1B;

/// Single-transform steps an AES-128 step machine takes (round 10 has no MixColumns)
pub const AES128_TOTAL_STEPS: usize = (AES128_ROUNDS - 1) * 4 + 3;
