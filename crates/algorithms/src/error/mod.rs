//! Error handling for cipher primitives
//!
//! The primitives share the API error type directly; there is no separate
//! primitive-level error to convert from.

pub use pwcrypt_api::error::{validate, Error, Result};
