//! Constants for the password envelope (key derivation, wire layout and
//! boundary sentinels)

use crate::symmetric::{AES_BLOCK_SIZE, CBC_IV_SIZE};

/// Multiplier mixed into every byte of the XOR key derivation
pub const XOR_KDF_MULTIPLIER: u8 = 7;

/// Smallest decoded envelope: one IV followed by one ciphertext block
pub const MIN_ENVELOPE_SIZE: usize = CBC_IV_SIZE + AES_BLOCK_SIZE;

/// Returned by the text boundary when encryption fails for any reason
pub const ENCRYPTION_ERROR: &str = "ENCRYPTION_ERROR";

/// Returned by the text boundary when decryption fails for any reason
pub const DECRYPTION_ERROR: &str = "DECRYPTION_ERROR";

/// Default PBKDF2 iteration count for the opt-in password hashing derivation
pub const PBKDF2_DEFAULT_ITERATIONS: u32 = 100_000;

/// Minimum salt size accepted by the PBKDF2 derivation
pub const PBKDF2_MIN_SALT_SIZE: usize = 8;
