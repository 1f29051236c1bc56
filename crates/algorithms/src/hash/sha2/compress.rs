//! The compression function, exposed one round at a time

use crate::types::Registers;

use super::schedule::expand;
use super::{MessageBlock, K256};

/// Σ0: ROTR² ⊕ ROTR¹³ ⊕ ROTR²²
#[inline(always)]
pub fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// Σ1: ROTR⁶ ⊕ ROTR¹¹ ⊕ ROTR²⁵
#[inline(always)]
pub fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// Choose: bits of `f` where `e` is set, bits of `g` elsewhere
#[inline(always)]
pub fn ch(e: u32, f: u32, g: u32) -> u32 {
    (e & f) ^ ((!e) & g)
}

/// Majority of three, bitwise
#[inline(always)]
pub fn maj(a: u32, b: u32, c: u32) -> u32 {
    (a & b) ^ (a & c) ^ (b & c)
}

/// One compression round over the working registers
pub fn round(working: &Registers, w: u32, k: u32) -> Registers {
    let [a, b, c, d, e, f, g, h] = *working.words();

    let temp1 = h
        .wrapping_add(big_sigma1(e))
        .wrapping_add(ch(e, f, g))
        .wrapping_add(k)
        .wrapping_add(w);
    let temp2 = big_sigma0(a).wrapping_add(maj(a, b, c));

    Registers::new([
        temp1.wrapping_add(temp2),
        a,
        b,
        c,
        d.wrapping_add(temp1),
        e,
        f,
        g,
    ])
}

/// Run all 64 rounds over one block and fold the result into `hash`
pub fn compress_block(hash: &Registers, block: &MessageBlock) -> Registers {
    let w = expand(block);
    let working = w
        .iter()
        .zip(K256.iter())
        .fold(*hash, |regs, (&wt, &kt)| round(&regs, wt, kt));
    hash.wrapping_add(&working)
}
