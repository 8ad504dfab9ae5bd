//! Padding schemes for block-aligned modes

pub mod pkcs7;

pub use pkcs7::{pad, unpad};
