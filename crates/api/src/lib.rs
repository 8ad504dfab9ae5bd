//! Public error and type surface for the pwcrypt library
//!
//! This crate holds the pieces every other pwcrypt crate agrees on: the
//! error taxonomy, validation helpers, and the zeroizing container used for
//! key material.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, Error, Result};
pub use types::SecretBytes;
