//! Finite Field Arithmetic for GF(2^8)
//!
//! Elements are bytes, addition is XOR, and multiplication is carry-less
//! polynomial multiplication reduced by x^8 + x^4 + x^3 + x + 1 (0x11B), the
//! polynomial AES is defined over.
//!
//! Both functions are `const fn` so the AES substitution tables can be built
//! at compile time from first principles instead of being typed in.

use pwcrypt_params::symmetric::GF256_REDUCTION;

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
#[inline(always)]
pub const fn gf_mul(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    let mut i = 0;
    while i < 8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a >> 7;
        a <<= 1;
        // if the top bit fell off, reduce
        a ^= hi * GF256_REDUCTION;
        b >>= 1;
        i += 1;
    }
    p
}

/// Raise to the 254th power, which is b⁻¹ in GF(2⁸). Zero maps to zero.
#[inline(always)]
pub const fn gf_inv(x: u8) -> u8 {
    let x2 = gf_mul(x, x);
    let x4 = gf_mul(x2, x2);
    let x8 = gf_mul(x4, x4);
    let x16 = gf_mul(x8, x8);
    let x32 = gf_mul(x16, x16);
    let x64 = gf_mul(x32, x32);
    let x128 = gf_mul(x64, x64);
    // x^254 = x^128 · x^64 · x^32 · x^16 · x^8 · x^4 · x^2
    let mut y = gf_mul(x128, x64);
    y = gf_mul(y, x32);
    y = gf_mul(y, x16);
    y = gf_mul(y, x8);
    y = gf_mul(y, x4);
    gf_mul(y, x2)
}
