//! Standard base64 (RFC 4648 section 4) with `=` padding
//!
//! [`encode`] always emits a multiple of four characters. [`decode`] is
//! lenient: it reads symbols until the first character outside the alphabet
//! (padding included) and silently drops everything from there on. It never
//! fails; malformed input simply decodes to fewer bytes, and the envelope
//! layer rejects buffers that come out too short.

/// The 64-symbol alphabet, indexed by 6-bit value
pub const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Padding character
pub const PAD: u8 = b'=';

/// Marks bytes that are not part of the alphabet in [`DECODE_TABLE`]
const INVALID: u8 = 0xFF;

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < 64 {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Reverse lookup from ASCII byte to 6-bit value
const DECODE_TABLE: [u8; 256] = build_decode_table();

/// Length of the encoding of `len` input bytes
pub const fn encoded_len(len: usize) -> usize {
    len.div_ceil(3) * 4
}

/// Encode bytes as padded base64 text
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(encoded_len(data.len()));

    let mut chunks = data.chunks_exact(3);
    for chunk in &mut chunks {
        let group = (chunk[0] as u32) << 16 | (chunk[1] as u32) << 8 | chunk[2] as u32;
        for shift in [18, 12, 6, 0] {
            out.push(ALPHABET[(group >> shift) as usize & 0x3F] as char);
        }
    }

    match *chunks.remainder() {
        [a] => {
            let group = (a as u32) << 16;
            out.push(ALPHABET[(group >> 18) as usize & 0x3F] as char);
            out.push(ALPHABET[(group >> 12) as usize & 0x3F] as char);
            out.push(PAD as char);
            out.push(PAD as char);
        }
        [a, b] => {
            let group = (a as u32) << 16 | (b as u32) << 8;
            out.push(ALPHABET[(group >> 18) as usize & 0x3F] as char);
            out.push(ALPHABET[(group >> 12) as usize & 0x3F] as char);
            out.push(ALPHABET[(group >> 6) as usize & 0x3F] as char);
            out.push(PAD as char);
        }
        _ => {}
    }

    out
}

/// Decode base64 text, stopping at the first non-alphabet character.
///
/// Leftover bits that do not fill a whole byte are discarded.
pub fn decode(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() / 4 * 3 + 2);
    let mut acc: u32 = 0;
    let mut bits = 0u32;

    for &c in text.as_bytes() {
        let value = DECODE_TABLE[c as usize];
        if value == INVALID {
            break;
        }
        acc = (acc << 6) | value as u32;
        bits += 6;
        if bits >= 8 {
            bits -= 8;
            out.push((acc >> bits) as u8);
            acc &= (1 << bits) - 1;
        }
    }

    out
}
