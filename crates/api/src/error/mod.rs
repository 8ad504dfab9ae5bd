//! Error handling for the pwcrypt ecosystem
//!
//! Every fallible operation in the workspace returns [`Result`]. The
//! variants describe *why* an operation failed so that lower layers can be
//! tested precisely, but the text boundary in `pwcrypt-symmetric` collapses
//! all of them into one of two opaque sentinel strings.
//!
//! ## Missing integrity protection
//!
//! There is no `Authentication` variant. Ciphertexts carry no MAC, so a
//! tampered message whose last block happens to decrypt to valid padding is
//! accepted and yields wrong plaintext without any error.

pub mod validate;

use thiserror::Error;

/// Primary error type for pwcrypt operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The password could not be turned into a key (empty password,
    /// invalid derivation parameters)
    #[error("key derivation failed in {context}")]
    KeyDerivation {
        /// Where the derivation was rejected
        context: &'static str,
    },

    /// Padding removal found a corrupt or inconsistent trailer
    #[error("invalid padding in {context}")]
    Padding {
        /// Where the padding was rejected
        context: &'static str,
    },

    /// A decoded ciphertext buffer cannot hold an IV plus whole blocks
    #[error("decoded ciphertext has invalid length: expected at least {expected} bytes in whole blocks, got {actual}")]
    DecodedLength {
        /// Minimum acceptable length in bytes
        expected: usize,
        /// Actual decoded length in bytes
        actual: usize,
    },

    /// A caller supplied a buffer of the wrong size
    #[error("invalid length for {context}: expected {expected}, got {actual}")]
    InvalidLength {
        /// Where the length check failed
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// The IV source could not produce bytes
    #[error("random generation failed in {context}")]
    RandomGeneration {
        /// Which source failed
        context: &'static str,
    },

    /// Recovered bytes are not valid text at a string boundary
    #[error("encoding error in {context}")]
    Encoding {
        /// Where the conversion failed
        context: &'static str,
    },
}

/// Result type for pwcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Replace the context of an error while keeping its kind
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::KeyDerivation { .. } => Self::KeyDerivation { context },
            Self::Padding { .. } => Self::Padding { context },
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::RandomGeneration { .. } => Self::RandomGeneration { context },
            Self::Encoding { .. } => Self::Encoding { context },
            other => other,
        }
    }

    /// True for errors produced while turning ciphertext back into plaintext
    pub fn is_decryption_failure(&self) -> bool {
        matches!(
            self,
            Self::Padding { .. } | Self::DecodedLength { .. } | Self::Encoding { .. }
        )
    }
}

impl From<core::str::Utf8Error> for Error {
    fn from(_: core::str::Utf8Error) -> Self {
        Self::Encoding { context: "UTF-8 conversion" }
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(_: std::string::FromUtf8Error) -> Self {
        Self::Encoding { context: "UTF-8 conversion" }
    }
}

impl From<rand::Error> for Error {
    fn from(_: rand::Error) -> Self {
        Self::RandomGeneration { context: "random source" }
    }
}
