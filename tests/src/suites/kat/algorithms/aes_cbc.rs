//! Handlers for raw AES-256-CBC vectors (no padding, no encoding)

use std::collections::HashMap;

use pwcrypt_algorithms::block::{Aes256, BlockCipher, Cbc};
use pwcrypt_algorithms::types::{AesKey, Iv};
use zeroize::Zeroize;

use super::super::dispatcher::{insert, DispatchKey, HandlerFn};
use super::super::error::{EngineError, Result};
use super::super::model::{TestCase, TestGroup};

fn cipher_for(case: &TestCase) -> Result<Cbc<Aes256>> {
    let mut key_bytes = case.hex("key")?;
    let key = AesKey::from_slice(&key_bytes);
    key_bytes.zeroize();
    let iv = Iv::from_slice(&case.hex("iv")?)?;
    Ok(Cbc::new(Aes256::new(&key?), &iv))
}

/// AES-256-CBC encrypt
pub(crate) fn aes_cbc_encrypt(_group: &TestGroup, case: &TestCase) -> Result<()> {
    let cbc = cipher_for(case)?;
    let plaintext = case.hex("pt")?;
    let ciphertext = cbc.encrypt(&plaintext)?;

    match case.optional("ct") {
        Some(expected_hex) => {
            let expected = hex::decode(expected_hex)?;
            if ciphertext != expected {
                return Err(EngineError::mismatch_hex(&expected, &ciphertext));
            }
            Ok(())
        }
        None => Ok(()),
    }
}

/// AES-256-CBC decrypt
pub(crate) fn aes_cbc_decrypt(_group: &TestGroup, case: &TestCase) -> Result<()> {
    let cbc = cipher_for(case)?;
    let ciphertext = case.hex("ct")?;
    let plaintext = cbc.decrypt(&ciphertext)?;

    let expected = case.hex("pt")?;
    if plaintext != expected {
        return Err(EngineError::mismatch_hex(&expected, &plaintext));
    }
    Ok(())
}

pub fn register(map: &mut HashMap<DispatchKey, HandlerFn>) {
    insert(map, "AES-256-CBC", "encrypt", aes_cbc_encrypt);
    insert(map, "AES-256-CBC", "decrypt", aes_cbc_decrypt);
}
