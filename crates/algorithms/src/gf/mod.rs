//! Arithmetic in GF(2⁸) under the AES reduction polynomial
//!
//! Elements are bytes read as polynomials over GF(2); addition is XOR and
//! multiplication is carried out modulo x⁸ + x⁴ + x³ + x + 1. The AES
//! column mixing calls [`mul`] directly rather than reading a product table.

use stepcrypt_params::utils::symmetric::AES_REDUCTION_BYTE;

/// Multiply by x (the byte 0x02), reducing on overflow
#[inline(always)]
pub fn xtime(byte: u8) -> u8 {
    let high = byte >> 7;
    (byte << 1) ^ (high * AES_REDUCTION_BYTE)
}

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
pub fn mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    for _ in 0..8 {
        if b & 1 == 1 {
            p ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    p
}

/// Raise to the 254th power, which is the multiplicative inverse for x ≠ 0.
///
/// Zero maps to zero, matching the convention the S-box is built on.
pub fn inv(x: u8) -> u8 {
    let x2 = mul(x, x);
    let x4 = mul(x2, x2);
    let x8 = mul(x4, x4);
    let x16 = mul(x8, x8);
    let x32 = mul(x16, x16);
    let x64 = mul(x32, x32);
    let x128 = mul(x64, x64);
    // x^254 = x^128 · x^64 · x^32 · x^16 · x^8 · x^4 · x^2
    [x64, x32, x16, x8, x4, x2]
        .iter()
        .fold(x128, |acc, &term| mul(acc, term))
}
