//! # pwcrypt
//!
//! Password-based text encryption: AES-256 in CBC mode with PKCS#7 padding,
//! wrapped in a base64 envelope that carries its own IV.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! pwcrypt = "0.3"
//! ```
//!
//! ```
//! let sealed = pwcrypt::encrypt("A", "secret");
//! assert_eq!(pwcrypt::decrypt(&sealed, "secret"), "A");
//! assert_eq!(pwcrypt::decrypt("short", "secret"), pwcrypt::DECRYPTION_ERROR);
//! ```
//!
//! ## Features
//!
//! - `pbkdf2`: PBKDF2-HMAC-SHA256 key derivation. Text sealed with it is
//!   not readable through the default derivation.
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`pwcrypt-api`](api): Error type, validation helpers and secret buffers
//! - [`pwcrypt-params`](params): Sizes, round counts and sentinel strings
//! - [`pwcrypt-algorithms`](algorithms): AES-256, CBC, PKCS#7, base64, key derivation
//! - [`pwcrypt-symmetric`](symmetric): The password envelope and string entry points
//!
//! ## Security
//!
//! The default configuration reproduces an existing wire format and is weak:
//! the key is a masked repetition of the password, IVs come from a
//! clock-seeded non-cryptographic generator, and no MAC protects the
//! ciphertext. See [`symmetric`] for the stronger options.

#![forbid(unsafe_code)]

pub use pwcrypt_algorithms as algorithms;
pub use pwcrypt_api as api;
pub use pwcrypt_params as params;
pub use pwcrypt_symmetric as symmetric;

pub use pwcrypt_symmetric::{decrypt, encrypt, DECRYPTION_ERROR, ENCRYPTION_ERROR};

/// Common imports for pwcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export the envelope and its configuration
    pub use crate::symmetric::{
        IvSource, OsIvSource, PasswordCipher, PasswordCipherBuilder, ProcessIvSource,
        SeededIvSource,
    };

    // Re-export core traits
    pub use crate::algorithms::{BlockCipher, KeyDerivation, XorKeyDerivation};

    #[cfg(feature = "pbkdf2")]
    pub use crate::algorithms::Pbkdf2KeyDerivation;
}
