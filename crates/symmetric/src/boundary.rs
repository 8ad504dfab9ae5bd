//! String-in, string-out entry points
//!
//! These never fail. Any error is logged at `debug` level and replaced by
//! [`ENCRYPTION_ERROR`] or [`DECRYPTION_ERROR`], so callers cannot tell a
//! wrong password from corrupt input. Neither sentinel is valid base64 of
//! an envelope, but a plaintext may legitimately equal either one; compare
//! against the sentinel only when that cannot happen.

use crate::iv::IvSource;
use crate::pipeline::PasswordCipher;
use pwcrypt_algorithms::kdf::KeyDerivation;
pub use pwcrypt_params::envelope::{DECRYPTION_ERROR, ENCRYPTION_ERROR};

static DEFAULT_CIPHER: PasswordCipher = PasswordCipher::new();

/// Encrypt text under a password with the default cipher.
///
/// Returns the base64 envelope, or [`ENCRYPTION_ERROR`] (for example when
/// the password is empty).
///
/// ```
/// let sealed = pwcrypt_symmetric::encrypt("A", "secret");
/// assert_eq!(pwcrypt_symmetric::decrypt(&sealed, "secret"), "A");
/// assert_eq!(pwcrypt_symmetric::encrypt("A", ""), "ENCRYPTION_ERROR");
/// ```
pub fn encrypt(plaintext: &str, password: &str) -> String {
    encrypt_with(&DEFAULT_CIPHER, plaintext, password)
}

/// Decrypt text produced by [`encrypt`].
///
/// Returns the plaintext, or [`DECRYPTION_ERROR`] when the input is too
/// short, the padding is corrupt or the recovered bytes are not UTF-8.
pub fn decrypt(ciphertext: &str, password: &str) -> String {
    decrypt_with(&DEFAULT_CIPHER, ciphertext, password)
}

/// [`encrypt`] through a caller-configured cipher
pub fn encrypt_with<K, S>(cipher: &PasswordCipher<K, S>, plaintext: &str, password: &str) -> String
where
    K: KeyDerivation,
    S: IvSource,
{
    cipher
        .encrypt(plaintext.as_bytes(), password)
        .unwrap_or_else(|e| {
            log::debug!("encryption failed: {}", e);
            ENCRYPTION_ERROR.to_owned()
        })
}

/// [`decrypt`] through a caller-configured cipher
pub fn decrypt_with<K, S>(cipher: &PasswordCipher<K, S>, ciphertext: &str, password: &str) -> String
where
    K: KeyDerivation,
    S: IvSource,
{
    cipher
        .decrypt_to_string(ciphertext, password)
        .unwrap_or_else(|e| {
            log::debug!("decryption failed: {}", e);
            DECRYPTION_ERROR.to_owned()
        })
}
