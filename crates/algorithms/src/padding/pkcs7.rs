//! PKCS#7 byte padding
//!
//! Every message gains between 1 and 16 trailing bytes, each holding the pad
//! length. Block-aligned input gains a whole extra block, so removal is never
//! ambiguous.

use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater, ConstantTimeLess};

use crate::error::{Error, Result};
use pwcrypt_params::symmetric::AES_BLOCK_SIZE;

/// Pad `data` up to the next multiple of the block size
pub fn pad(data: &[u8]) -> Vec<u8> {
    let n = AES_BLOCK_SIZE - (data.len() % AES_BLOCK_SIZE);
    let mut result = Vec::with_capacity(data.len() + n);
    result.extend_from_slice(data);
    result.resize(data.len() + n, n as u8);
    result
}

/// Strip and validate PKCS#7 padding.
///
/// Fails with [`Error::Padding`] when the buffer is empty, when the last
/// byte is 0, above the block size or longer than the buffer, or when any of
/// the claimed pad bytes disagree. The trailer is inspected in full before
/// deciding, so the work done does not depend on where a mismatch sits.
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    let len = data.len();
    let Some(&last) = data.last() else {
        return Err(Error::Padding { context: "PKCS#7 unpad: empty input" });
    };

    let in_range = last.ct_gt(&0u8) & !last.ct_gt(&(AES_BLOCK_SIZE as u8));
    if !bool::from(in_range) || last as usize > len {
        return Err(Error::Padding { context: "PKCS#7 unpad: pad length out of range" });
    }

    // Look at the whole final block (or buffer, if shorter), checking only the
    // positions covered by the claimed pad length.
    let window = len.min(AES_BLOCK_SIZE);
    let mut consistent = Choice::from(1u8);
    for (offset, &byte) in data[len - window..].iter().rev().enumerate() {
        let covered = (offset as u8).ct_lt(&last);
        consistent &= !covered | byte.ct_eq(&last);
    }

    if !bool::from(consistent) {
        return Err(Error::Padding { context: "PKCS#7 unpad: inconsistent pad bytes" });
    }

    Ok(&data[..len - last as usize])
}
