//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode is a block cipher mode of operation that provides confidentiality
//! by XORing each plaintext block with the previous ciphertext block before
//! encryption. The first block is XORed with an initialization vector (IV).
//!
//! This implementation follows NIST SP 800-38A. It does not pad; callers pad
//! to a whole number of blocks first (see [`crate::padding`]).

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::BlockCipher;
use crate::error::{validate, Result};
use crate::types::{xor_block, Block, Iv};
use pwcrypt_params::symmetric::AES_BLOCK_SIZE;

/// CBC mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize> {
    cipher: B,
    iv: Block,
}

impl<B: BlockCipher + Zeroize> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    pub fn new(cipher: B, iv: &Iv) -> Self {
        Self {
            cipher,
            iv: iv.to_array(),
        }
    }

    /// Encrypts a message using CBC mode
    ///
    /// The plaintext must be a multiple of the block size.
    /// For plaintext that is not a multiple of the block size,
    /// padding must be applied before calling this function.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::multiple_of("CBC plaintext", plaintext.len(), AES_BLOCK_SIZE)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut prev_block = self.iv;

        for chunk in plaintext.chunks_exact(AES_BLOCK_SIZE) {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);

            // XOR with previous ciphertext block (or IV for the first block)
            xor_block(&mut block, &prev_block);
            self.cipher.encrypt_block(&mut block);

            ciphertext.extend_from_slice(&block);
            prev_block = block;
        }

        Ok(ciphertext)
    }

    /// Decrypts a message using CBC mode
    ///
    /// The ciphertext must be a multiple of the block size.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::multiple_of("CBC ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev_block = self.iv;

        for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);

            // Chaining uses the ciphertext as read, not the recovered plaintext
            let current_block = block;

            self.cipher.decrypt_block(&mut block);
            xor_block(&mut block, &prev_block);

            plaintext.extend_from_slice(&block);
            prev_block = current_block;
            block.zeroize();
        }

        Ok(plaintext)
    }
}
