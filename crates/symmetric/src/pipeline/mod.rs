//! The password envelope: key derivation, CBC encryption and base64 text
//!
//! A sealed message is the base64 encoding of
//!
//! ```text
//! IV (16 bytes) || AES-256-CBC(key, IV, PKCS#7(plaintext))
//! ```
//!
//! where the key comes from the configured [`KeyDerivation`] and the IV from
//! the configured [`IvSource`]. Nothing authenticates the result; see
//! [`Error`](crate::error::Error) for what that means for tampered input.
//!
//! ## Example usage
//!
//! ```
//! use pwcrypt_symmetric::{OsIvSource, PasswordCipher};
//!
//! let cipher = PasswordCipher::builder().with_iv_source(OsIvSource).build();
//! let sealed = cipher.encrypt(b"meet at noon", "hunter2").unwrap();
//! assert_eq!(cipher.decrypt(&sealed, "hunter2").unwrap(), b"meet at noon");
//! ```

use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::iv::{IvSource, ProcessIvSource};
use pwcrypt_algorithms::encoding::base64;
use pwcrypt_algorithms::kdf::{KeyDerivation, XorKeyDerivation};
use pwcrypt_algorithms::padding::pkcs7;
use pwcrypt_algorithms::types::Iv;
use pwcrypt_algorithms::{Aes256, BlockCipher, Cbc};
use pwcrypt_params::envelope::MIN_ENVELOPE_SIZE;
use pwcrypt_params::symmetric::{AES_BLOCK_SIZE, CBC_IV_SIZE};

/// Password-based text cipher
///
/// `K` turns the password into a key, `S` supplies one IV per message. The
/// defaults reproduce the historical wire format and IV behavior.
#[derive(Debug, Clone, Default)]
pub struct PasswordCipher<K = XorKeyDerivation, S = ProcessIvSource> {
    kdf: K,
    iv_source: S,
}

impl PasswordCipher {
    /// XOR key derivation with the process-wide IV generator
    pub const fn new() -> Self {
        Self {
            kdf: XorKeyDerivation,
            iv_source: ProcessIvSource::new(),
        }
    }

    /// Start configuring a cipher from the defaults
    pub fn builder() -> PasswordCipherBuilder {
        PasswordCipherBuilder {
            kdf: XorKeyDerivation,
            iv_source: ProcessIvSource::new(),
        }
    }
}

impl<K: KeyDerivation, S: IvSource> PasswordCipher<K, S> {
    /// The configured key derivation
    pub fn key_derivation(&self) -> &K {
        &self.kdf
    }

    /// The configured IV source
    pub fn iv_source(&self) -> &S {
        &self.iv_source
    }

    /// Seal `plaintext` under `password` with a fresh IV.
    ///
    /// The key is derived before an IV is drawn, so an empty password fails
    /// without consuming generator output.
    pub fn encrypt(&self, plaintext: &[u8], password: &str) -> Result<String> {
        let cipher = self.cipher_for(password)?;
        let iv = self.iv_source.next_iv()?;
        log::trace!(
            "encrypting {} bytes with {} / {}",
            plaintext.len(),
            self.kdf.algorithm(),
            self.iv_source.name()
        );
        self.seal(cipher, &iv, plaintext)
    }

    /// Seal with a caller-chosen IV.
    ///
    /// Reusing an IV under the same password leaks equal plaintext prefixes.
    /// Meant for fixed vectors, not for general use.
    pub fn encrypt_with_iv(&self, plaintext: &[u8], password: &str, iv: &Iv) -> Result<String> {
        let cipher = self.cipher_for(password)?;
        self.seal(cipher, iv, plaintext)
    }

    /// Open a sealed message.
    ///
    /// Fails with [`Error::DecodedLength`] when the decoded text cannot hold
    /// an IV plus at least one whole block, and with [`Error::Padding`] when
    /// the recovered trailer is corrupt (the usual symptom of a wrong
    /// password).
    pub fn decrypt(&self, text: &str, password: &str) -> Result<Vec<u8>> {
        let decoded = base64::decode(text);
        if decoded.len() < MIN_ENVELOPE_SIZE {
            return Err(Error::DecodedLength {
                expected: MIN_ENVELOPE_SIZE,
                actual: decoded.len(),
            });
        }

        let (iv_bytes, body) = decoded.split_at(CBC_IV_SIZE);
        if body.len() % AES_BLOCK_SIZE != 0 {
            return Err(Error::DecodedLength {
                expected: MIN_ENVELOPE_SIZE,
                actual: decoded.len(),
            });
        }
        let iv = Iv::from_slice(iv_bytes)?;

        let cipher = self.cipher_for(password)?;
        log::trace!("decrypting {} byte body with {}", body.len(), self.kdf.algorithm());

        let mut padded = Cbc::new(cipher, &iv).decrypt(body)?;
        let plaintext = pkcs7::unpad(&padded).map(<[u8]>::to_vec);
        padded.zeroize();
        plaintext
    }

    /// [`decrypt`](Self::decrypt), then require the plaintext to be UTF-8
    pub fn decrypt_to_string(&self, text: &str, password: &str) -> Result<String> {
        let bytes = self.decrypt(text, password)?;
        String::from_utf8(bytes).map_err(|e| {
            e.into_bytes().zeroize();
            Error::Encoding {
                context: "decrypted plaintext",
            }
        })
    }

    fn cipher_for(&self, password: &str) -> Result<Aes256> {
        let key = self.kdf.derive(password.as_bytes())?;
        Ok(Aes256::new(&key))
    }

    fn seal(&self, cipher: Aes256, iv: &Iv, plaintext: &[u8]) -> Result<String> {
        let mut padded = pkcs7::pad(plaintext);
        let body = Cbc::new(cipher, iv).encrypt(&padded);
        padded.zeroize();
        let body = body?;

        let mut envelope = Vec::with_capacity(CBC_IV_SIZE + body.len());
        envelope.extend_from_slice(iv.as_ref());
        envelope.extend_from_slice(&body);
        Ok(base64::encode(&envelope))
    }
}

/// Builder for [`PasswordCipher`]
#[derive(Debug, Clone)]
pub struct PasswordCipherBuilder<K = XorKeyDerivation, S = ProcessIvSource> {
    kdf: K,
    iv_source: S,
}

impl<K, S> PasswordCipherBuilder<K, S> {
    /// Replace the key derivation
    pub fn with_key_derivation<K2: KeyDerivation>(self, kdf: K2) -> PasswordCipherBuilder<K2, S> {
        PasswordCipherBuilder {
            kdf,
            iv_source: self.iv_source,
        }
    }

    /// Replace the IV source
    pub fn with_iv_source<S2: IvSource>(self, iv_source: S2) -> PasswordCipherBuilder<K, S2> {
        PasswordCipherBuilder {
            kdf: self.kdf,
            iv_source,
        }
    }

    /// Finish configuration
    pub fn build(self) -> PasswordCipher<K, S> {
        PasswordCipher {
            kdf: self.kdf,
            iv_source: self.iv_source,
        }
    }
}
