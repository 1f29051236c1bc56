//! Message schedule expansion

use stepcrypt_params::utils::hash::{SHA256_BLOCK_WORDS, SHA256_SCHEDULE_WORDS};

use super::{MessageBlock, MessageSchedule};

/// σ0: ROTR⁷ ⊕ ROTR¹⁸ ⊕ SHR³
#[inline(always)]
pub fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// σ1: ROTR¹⁷ ⊕ ROTR¹⁹ ⊕ SHR¹⁰
#[inline(always)]
pub fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// Expand one block into the 64-word schedule
pub fn expand(block: &MessageBlock) -> MessageSchedule {
    let mut w = [0u32; SHA256_SCHEDULE_WORDS];
    w[..SHA256_BLOCK_WORDS].copy_from_slice(block);

    for t in SHA256_BLOCK_WORDS..SHA256_SCHEDULE_WORDS {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
    w
}
