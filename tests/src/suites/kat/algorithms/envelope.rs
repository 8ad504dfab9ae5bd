//! Handlers for the password envelope (key derivation, CBC, base64)

use std::collections::HashMap;

use pwcrypt_algorithms::types::Iv;
use pwcrypt_symmetric::PasswordCipher;

use super::super::dispatcher::{insert, DispatchKey, HandlerFn};
use super::super::error::{EngineError, Result};
use super::super::model::{TestCase, TestGroup};

/// Seal with the default cipher and a fixed IV
pub(crate) fn envelope_encrypt(_group: &TestGroup, case: &TestCase) -> Result<()> {
    let password = case.field("password")?;
    let iv = Iv::from_slice(&case.hex("iv")?)?;
    let plaintext = case.field("pt")?;

    let sealed = PasswordCipher::new().encrypt_with_iv(plaintext.as_bytes(), password, &iv)?;

    let expected = case.field("ct")?;
    if sealed != expected {
        return Err(EngineError::Mismatch {
            expected: expected.to_string(),
            actual: sealed,
        });
    }
    Ok(())
}

/// Open with the default cipher; the recovered text must be UTF-8
pub(crate) fn envelope_decrypt(_group: &TestGroup, case: &TestCase) -> Result<()> {
    let password = case.field("password")?;
    let text = case.field("ct")?;

    let recovered = PasswordCipher::new().decrypt_to_string(text, password)?;

    let expected = case
        .optional("pt")
        .ok_or_else(|| EngineError::InvalidData(format!("case {} decrypted but has no pt", case.test_id)))?;
    if recovered != expected {
        return Err(EngineError::Mismatch {
            expected: expected.to_string(),
            actual: recovered,
        });
    }
    Ok(())
}

pub fn register(map: &mut HashMap<DispatchKey, HandlerFn>) {
    insert(map, "PW-ENVELOPE", "encrypt", envelope_encrypt);
    insert(map, "PW-ENVELOPE", "decrypt", envelope_decrypt);
}
