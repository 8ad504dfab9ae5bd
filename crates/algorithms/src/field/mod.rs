//! Finite field arithmetic

pub mod gf256;

pub use gf256::{gf_inv, gf_mul};
