//! Password to key derivation
//!
//! Two derivations share the [`KeyDerivation`] trait:
//!
//! - [`XorKeyDerivation`] is the default and defines the wire format. It
//!   repeats the password across 32 bytes and XORs in a position mask. It is
//!   **not** a cryptographic KDF: the key is trivially invertible back to
//!   the password, and no work factor slows guessing.
//! - `Pbkdf2KeyDerivation` (feature `pbkdf2`) runs PBKDF2-HMAC-SHA256 with a
//!   caller-chosen salt and iteration count. Text encrypted under it only
//!   decrypts under the same derivation, salt and iteration count.
//!
//! ## Example usage
//!
//! ```
//! use pwcrypt_algorithms::kdf::{KeyDerivation, XorKeyDerivation};
//!
//! let key = XorKeyDerivation.derive(b"secret").unwrap();
//! assert_eq!(key[0], b's');
//! assert!(XorKeyDerivation.derive(b"").is_err());
//! ```

use crate::error::Result;
use crate::types::AesKey;

pub mod xor;
pub use xor::XorKeyDerivation;

#[cfg(feature = "pbkdf2")]
pub mod pbkdf2;
#[cfg(feature = "pbkdf2")]
pub use self::pbkdf2::Pbkdf2KeyDerivation;

/// Turns a password into an AES-256 key
pub trait KeyDerivation {
    /// Short algorithm name, for logs
    fn algorithm(&self) -> &'static str;

    /// Derive the key. Empty passwords are always rejected with
    /// [`Error::KeyDerivation`](crate::error::Error::KeyDerivation).
    fn derive(&self, password: &[u8]) -> Result<AesKey>;
}

impl<K: KeyDerivation + ?Sized> KeyDerivation for &K {
    fn algorithm(&self) -> &'static str {
        (**self).algorithm()
    }

    fn derive(&self, password: &[u8]) -> Result<AesKey> {
        (**self).derive(password)
    }
}
