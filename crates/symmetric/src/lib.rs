//! Password-based text encryption for the pwcrypt library
//!
//! This crate assembles the primitives in `pwcrypt-algorithms` into the
//! password envelope and exposes it two ways:
//!
//! - [`PasswordCipher`]: typed `Result` API with a configurable key
//!   derivation and IV source.
//! - [`encrypt`] / [`decrypt`]: string functions that report failure
//!   through the `"ENCRYPTION_ERROR"` / `"DECRYPTION_ERROR"` sentinels.
//!
//! # Security
//!
//! The defaults are kept for compatibility with existing ciphertexts and are
//! weak: the key is a masked repetition of the password, IVs come from a
//! clock-seeded non-cryptographic generator, and nothing authenticates the
//! ciphertext. Prefer [`OsIvSource`] and, where wire compatibility is not
//! needed, PBKDF2 key derivation (feature `pbkdf2`).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod boundary;
pub mod error;
pub mod iv;
pub mod pipeline;

pub use boundary::{decrypt, decrypt_with, encrypt, encrypt_with, DECRYPTION_ERROR, ENCRYPTION_ERROR};
pub use iv::{IvSource, OsIvSource, ProcessIvSource, SeededIvSource};
pub use pipeline::{PasswordCipher, PasswordCipherBuilder};

// Re-export the API error system instead of custom error types
pub use pwcrypt_api::error::{validate, Error, Result};

// Re-export the key derivations so callers need not depend on the
// algorithms crate directly
pub use pwcrypt_algorithms::kdf::{KeyDerivation, XorKeyDerivation};
#[cfg(feature = "pbkdf2")]
pub use pwcrypt_algorithms::kdf::Pbkdf2KeyDerivation;
pub use pwcrypt_algorithms::types::Iv;
