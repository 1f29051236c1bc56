//! Constants for SHA-256

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Internal block size of SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// 32-bit words per SHA-256 block
pub const SHA256_BLOCK_WORDS: usize = 16;

/// Words in the expanded message schedule
pub const SHA256_SCHEDULE_WORDS: usize = 64;

/// Compression rounds per block
pub const SHA256_ROUNDS: usize = 64;

/// Size of the trailing big-endian bit-length field in bytes
pub const SHA256_LENGTH_FIELD_SIZE: usize = 8;

/// Marker byte appended directly after the message
pub const SHA256_PAD_MARKER: u8 = 0x80;

/// Digest size in bits
pub const SHA256_OUTPUT_BITS: usize = SHA256_OUTPUT_SIZE * 8;
