//! Validation utilities shared by every pwcrypt crate

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::InvalidLength {
            context,
            expected: min,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a whole number of `unit`-sized blocks.
///
/// On failure `expected` carries the next multiple of `unit`.
#[inline(always)]
pub fn multiple_of(context: &'static str, actual: usize, unit: usize) -> Result<()> {
    if unit == 0 || !actual.is_multiple_of(unit) {
        let expected = actual.checked_div(unit).map_or(0, |blocks| (blocks + 1) * unit);
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a password before it reaches a key derivation
#[inline(always)]
pub fn password(context: &'static str, password: &[u8]) -> Result<()> {
    if password.is_empty() {
        return Err(Error::KeyDerivation { context });
    }
    Ok(())
}
