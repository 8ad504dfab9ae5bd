//! Position-masked repeating XOR derivation
//!
//! `key[i] = password[i % len] ^ (i * 7 mod 256)` for `i` in `0..32`.
//!
//! Anyone holding the key recovers the password by undoing the mask, and
//! short passwords produce keys with visible period. Kept because it defines
//! the on-wire compatibility of every existing ciphertext.

use super::KeyDerivation;
use crate::error::{validate, Result};
use crate::types::AesKey;
use pwcrypt_params::envelope::XOR_KDF_MULTIPLIER;

/// The default, wire-compatible (and weak) derivation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct XorKeyDerivation;

impl KeyDerivation for XorKeyDerivation {
    fn algorithm(&self) -> &'static str {
        "XOR-repeat"
    }

    fn derive(&self, password: &[u8]) -> Result<AesKey> {
        validate::password("XOR key derivation", password)?;

        let mut key = AesKey::zeroed();
        for (i, byte) in key.iter_mut().enumerate() {
            *byte = password[i % password.len()] ^ (i as u8).wrapping_mul(XOR_KDF_MULTIPLIER);
        }
        Ok(key)
    }
}
