//! Error handling for password encryption
//!
//! The façade uses the API error type unchanged. Callers that want a cause
//! use [`PasswordCipher`](crate::PasswordCipher) directly; callers of the
//! text boundary ([`crate::encrypt`], [`crate::decrypt`]) only ever see a
//! sentinel string.

pub use pwcrypt_api::error::{validate, Error, Result};
