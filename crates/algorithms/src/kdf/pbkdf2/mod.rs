//! PBKDF2-HMAC-SHA256 key derivation (RFC 8018)
//!
//! The replacement for [`XorKeyDerivation`](super::XorKeyDerivation) when
//! wire compatibility with existing ciphertexts is not needed.

use ::pbkdf2::pbkdf2;
use hmac::Hmac;
use sha2::Sha256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::KeyDerivation;
use crate::error::{validate, Error, Result};
use crate::types::AesKey;
use pwcrypt_params::envelope::{PBKDF2_DEFAULT_ITERATIONS, PBKDF2_MIN_SALT_SIZE};
use pwcrypt_params::symmetric::AES256_KEY_SIZE;

/// PBKDF2-HMAC-SHA256 with a fixed salt and iteration count
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Pbkdf2KeyDerivation {
    salt: Vec<u8>,
    #[zeroize(skip)]
    iterations: u32,
}

impl Pbkdf2KeyDerivation {
    /// Creates a derivation with an explicit iteration count
    pub fn new(salt: &[u8], iterations: u32) -> Result<Self> {
        validate::min_length("PBKDF2 salt", salt.len(), PBKDF2_MIN_SALT_SIZE)?;
        if iterations == 0 {
            return Err(Error::KeyDerivation { context: "PBKDF2 iterations" });
        }
        Ok(Self {
            salt: salt.to_vec(),
            iterations,
        })
    }

    /// Creates a derivation with the default iteration count
    pub fn with_salt(salt: &[u8]) -> Result<Self> {
        Self::new(salt, PBKDF2_DEFAULT_ITERATIONS)
    }

    /// Iteration count
    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl core::fmt::Debug for Pbkdf2KeyDerivation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pbkdf2KeyDerivation")
            .field("salt_len", &self.salt.len())
            .field("iterations", &self.iterations)
            .finish()
    }
}

fn pbkdf2_sha256(password: &[u8], salt: &[u8], iterations: u32) -> [u8; AES256_KEY_SIZE] {
    let mut key = [0u8; AES256_KEY_SIZE];
    // pbkdf2 returns () when successful
    let _: () = pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut key);
    key
}

impl KeyDerivation for Pbkdf2KeyDerivation {
    fn algorithm(&self) -> &'static str {
        "PBKDF2-HMAC-SHA256"
    }

    fn derive(&self, password: &[u8]) -> Result<AesKey> {
        validate::password("PBKDF2 key derivation", password)?;

        let mut raw = pbkdf2_sha256(password, &self.salt, self.iterations);
        let key = AesKey::new(raw);
        raw.zeroize();
        Ok(key)
    }
}
