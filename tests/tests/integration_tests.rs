//! End-to-end behavior of the string entry points

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use pwcrypt::prelude::*;
use pwcrypt::{decrypt, encrypt, DECRYPTION_ERROR, ENCRYPTION_ERROR};

#[test]
fn test_round_trip_single_character() {
    let sealed = encrypt("A", "secret");
    assert_ne!(sealed, ENCRYPTION_ERROR);
    assert_eq!(decrypt(&sealed, "secret"), "A");
}

#[test]
fn test_round_trip_empty_plaintext() {
    let sealed = encrypt("", "secret");
    assert_ne!(sealed, ENCRYPTION_ERROR);
    assert_eq!(decrypt(&sealed, "secret"), "");
}

#[test]
fn test_sentinel_values() {
    assert_eq!(ENCRYPTION_ERROR, "ENCRYPTION_ERROR");
    assert_eq!(DECRYPTION_ERROR, "DECRYPTION_ERROR");
}

#[test]
fn test_short_input_is_rejected() {
    assert_eq!(decrypt("short", "secret"), DECRYPTION_ERROR);
    assert_eq!(decrypt("", "secret"), DECRYPTION_ERROR);
    assert_eq!(decrypt("====", "secret"), DECRYPTION_ERROR);
}

#[test]
fn test_empty_password_is_rejected() {
    assert_eq!(encrypt("A", ""), ENCRYPTION_ERROR);
    assert_eq!(encrypt("", ""), ENCRYPTION_ERROR);
}

#[test]
fn test_wrong_password_never_yields_plaintext() {
    let plaintext = "the eagle lands at midnight";
    let sealed = encrypt(plaintext, "right password");
    for wrong in ["wrong password", "Right password", "right passwor", "x"] {
        assert_ne!(decrypt(&sealed, wrong), plaintext);
    }
}

#[test]
fn test_output_is_standard_base64() {
    for (plaintext, body_len) in [("", 16), ("A", 16), ("exactly16bytes!!", 32), ("seventeen bytes!!", 32)] {
        let sealed = encrypt(plaintext, "secret");
        assert_eq!(sealed.len() % 4, 0);

        let raw = STANDARD.decode(&sealed).expect("output must be valid base64");
        assert_eq!(raw.len(), 16 + body_len, "plaintext {:?}", plaintext);
    }
}

#[test]
fn test_ciphertexts_are_randomized() {
    let a = encrypt("same", "secret");
    let b = encrypt("same", "secret");
    assert_ne!(a, b);
    assert_eq!(decrypt(&a, "secret"), decrypt(&b, "secret"));
}

#[test]
fn test_truncated_ciphertext() {
    let sealed = encrypt("a message spanning more than one block", "secret");
    let raw = STANDARD.decode(&sealed).unwrap();

    // One byte short breaks block alignment; the IV alone is too short
    let unaligned = STANDARD.encode(&raw[..raw.len() - 1]);
    assert_eq!(decrypt(&unaligned, "secret"), DECRYPTION_ERROR);

    let iv_only = STANDARD.encode(&raw[..16]);
    assert_eq!(decrypt(&iv_only, "secret"), DECRYPTION_ERROR);
}

#[test]
fn test_tampering_is_not_detected() {
    let cipher = PasswordCipher::new();
    let iv = pwcrypt::symmetric::Iv::new([0u8; 16]);
    let sealed = cipher.encrypt_with_iv(b"amount=10", "secret", &iv).unwrap();

    let mut raw = STANDARD.decode(&sealed).unwrap();
    raw[7] ^= b'1' ^ b'9';
    let forged = STANDARD.encode(&raw);

    assert_eq!(decrypt(&forged, "secret"), "amount=90");
}

#[test]
fn test_typed_errors_behind_the_sentinels() {
    let cipher = PasswordCipher::new();
    assert!(matches!(
        cipher.encrypt(b"A", ""),
        Err(Error::KeyDerivation { .. })
    ));
    assert!(matches!(
        cipher.decrypt("short", "secret"),
        Err(Error::DecodedLength { expected: 32, actual: 3 })
    ));
}

#[test]
fn test_os_rng_cipher_interoperates() {
    let cipher = PasswordCipher::builder().with_iv_source(OsIvSource).build();
    let sealed = cipher.encrypt("interop".as_bytes(), "secret").unwrap();
    assert_eq!(decrypt(&sealed, "secret"), "interop");
    assert_eq!(
        cipher.decrypt_to_string(&encrypt("interop", "secret"), "secret").unwrap(),
        "interop"
    );
}

#[cfg(feature = "pbkdf2")]
#[test]
fn test_pbkdf2_round_trip() {
    let kdf = Pbkdf2KeyDerivation::new(b"0123456789abcdef", 2_000).unwrap();
    let cipher = PasswordCipher::builder()
        .with_key_derivation(kdf)
        .with_iv_source(OsIvSource)
        .build();

    let sealed = pwcrypt::symmetric::encrypt_with(&cipher, "A", "secret");
    assert_eq!(pwcrypt::symmetric::decrypt_with(&cipher, &sealed, "secret"), "A");
    assert_ne!(decrypt(&sealed, "secret"), "A");
}
