//! Cipher primitives for the pwcrypt library
//!
//! This crate provides the pieces of the password envelope, leaves first:
//!
//! - [`field`]: GF(2^8) arithmetic under the AES polynomial
//! - [`block`]: the AES-256 block cipher and CBC chaining
//! - [`padding`]: PKCS#7 padding
//! - [`encoding`]: base64 text encoding
//! - [`kdf`]: password to key derivation
//!
//! Everything here is synchronous and allocation-light. Keys and round keys
//! are zeroized when dropped.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

pub mod field;

// Block cipher implementations
pub mod block;
pub use block::{Aes256, BlockCipher, Cbc, RoundKeys};

pub mod padding;

pub mod encoding;

// KDF implementations
pub mod kdf;
pub use kdf::{KeyDerivation, XorKeyDerivation};
#[cfg(feature = "pbkdf2")]
pub use kdf::Pbkdf2KeyDerivation;

// Type system
pub mod types;
pub use types::{AesKey, Block, Iv, Nonce, SecretBytes};
