//! Block cipher implementations
//!
//! This module contains the AES-256 block cipher and the CBC mode that
//! chains it across whole messages.
//!
//! ## Example usage
//!
//! ```
//! use pwcrypt_algorithms::block::{Aes256, BlockCipher, Cbc};
//! use pwcrypt_algorithms::types::{AesKey, Iv};
//!
//! let key = AesKey::new([0x2b; 32]);
//! let iv = Iv::new([0x00; 16]);
//!
//! let mode = Cbc::new(Aes256::new(&key), &iv);
//!
//! let plaintext = b"secret message with padding...!!"; // Exactly 32 bytes (multiple of 16)
//! let ciphertext = mode.encrypt(plaintext).unwrap();
//! let decrypted = mode.decrypt(&ciphertext).unwrap();
//!
//! assert_eq!(plaintext, &decrypted[..]);
//! ```

use zeroize::Zeroize;

use crate::types::Block;

pub mod aes;
pub mod modes;

// Re-exports
pub use aes::{Aes256, RoundKeys};
pub use modes::cbc::Cbc;

/// Marker trait for cipher algorithms with compile-time properties
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Algorithm name
    fn name() -> &'static str;
}

/// A keyed permutation over fixed 16-byte blocks.
///
/// Block length is part of the signature, so neither direction can fail.
pub trait BlockCipher {
    /// The algorithm this cipher implements
    type Algorithm: CipherAlgorithm;

    /// Key type with appropriate size guarantee
    type Key: AsRef<[u8]> + Clone + Zeroize;

    /// Creates a new block cipher instance with the given key
    fn new(key: &Self::Key) -> Self;

    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut Block);

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut Block);

    /// Returns the key size in bytes
    fn key_size() -> usize {
        Self::Algorithm::KEY_SIZE
    }

    /// Returns the block size in bytes
    fn block_size() -> usize {
        Self::Algorithm::BLOCK_SIZE
    }

    /// Returns the name of the block cipher
    fn name() -> &'static str {
        Self::Algorithm::name()
    }
}
