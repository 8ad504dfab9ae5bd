//! Constants grouped by concern

pub mod envelope;
pub mod symmetric;
