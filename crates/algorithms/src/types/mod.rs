//! Fixed-size types used across the cipher pipeline
//!
//! Blocks, keys and IVs are plain arrays wrapped in types whose sizes are
//! known at compile time, so a 15-byte "block" cannot reach the cipher.

pub mod nonce;

pub use nonce::Nonce;
pub use pwcrypt_api::types::SecretBytes;

use pwcrypt_params::symmetric::{AES256_KEY_SIZE, AES_BLOCK_SIZE, CBC_IV_SIZE};

/// One cipher block: a 4x4 byte matrix stored column by column
pub type Block = [u8; AES_BLOCK_SIZE];

/// A 256-bit AES key, zeroized on drop
pub type AesKey = SecretBytes<AES256_KEY_SIZE>;

/// A CBC initialization vector
pub type Iv = Nonce<CBC_IV_SIZE>;

/// XOR `src` into `dst` byte for byte
#[inline(always)]
pub fn xor_block(dst: &mut Block, src: &Block) {
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        *d ^= s;
    }
}
