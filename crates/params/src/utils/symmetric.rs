//! Constants for the AES-256 block cipher and CBC mode

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of rounds for a 256-bit key
pub const AES256_ROUNDS: usize = 14;

/// Number of round keys produced by the AES-256 key schedule (rounds + 1)
pub const AES256_ROUND_KEYS: usize = AES256_ROUNDS + 1;

/// Number of 32-bit words in the expanded AES-256 key
pub const AES256_SCHEDULE_WORDS: usize = 4 * AES256_ROUND_KEYS;

/// Number of 32-bit words in an AES-256 key
pub const AES256_KEY_WORDS: usize = AES256_KEY_SIZE / 4;

/// CBC initialization vector size in bytes
pub const CBC_IV_SIZE: usize = AES_BLOCK_SIZE;

/// AES reducing polynomial x^8 + x^4 + x^3 + x + 1 with the x^8 term dropped
pub const GF256_REDUCTION: u8 = 0x1B;
