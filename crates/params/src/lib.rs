//! Constant values for the pwcrypt library
//!
//! Sizes, round counts and boundary strings shared by every layer of the
//! cipher pipeline.

#![no_std]
#![forbid(unsafe_code)]

pub mod utils;

pub use utils::envelope;
pub use utils::symmetric;
