//! AES-256 block cipher
//!
//! This module implements the Advanced Encryption Standard with a 256-bit
//! key as specified in FIPS 197: a 14-round substitution-permutation network
//! over a 4x4 byte state.
//!
//! The state is a `[u8; 16]` in column-major order, so byte `4 * c + r` sits
//! in row `r` of column `c`.
//!
//! ## Side channels
//!
//! SubBytes is a table lookup into [`SBOX`]/[`INV_SBOX`]. The tables are
//! generated at compile time from GF(2^8) inversion and the AES affine map,
//! but lookups are indexed by secret data and are not constant-time.

use byteorder::{BigEndian, ByteOrder};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::field::{gf_inv, gf_mul};
use crate::types::{AesKey, Block};
use pwcrypt_params::symmetric::{
    AES256_KEY_SIZE, AES256_KEY_WORDS, AES256_ROUNDS, AES256_ROUND_KEYS, AES256_SCHEDULE_WORDS,
    AES_BLOCK_SIZE,
};

/// Round constants for AES-256 key expansion, indexed by `i / 8`
const RCON: [u32; 8] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000, 0x08000000, 0x10000000, 0x20000000,
    0x40000000,
];

/// MixColumns matrix, one row per output byte
const MIX: [[u8; 4]; 4] = [[2, 3, 1, 1], [1, 2, 3, 1], [1, 1, 2, 3], [3, 1, 1, 2]];

/// InvMixColumns matrix, the GF(2^8) inverse of [`MIX`]
const INV_MIX: [[u8; 4]; 4] = [
    [14, 11, 13, 9],
    [9, 14, 11, 13],
    [13, 9, 14, 11],
    [11, 13, 9, 14],
];

/// AES forward S-box: inv(x) ⊕ ROTL(inv(x),1–4) ⊕ 0x63
const fn sbox_entry(x: u8) -> u8 {
    let i = gf_inv(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        table[x] = sbox_entry(x as u8);
        x += 1;
    }
    table
}

const fn invert_table(table: &[u8; 256]) -> [u8; 256] {
    let mut inv = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        inv[table[x] as usize] = x as u8;
        x += 1;
    }
    inv
}

/// AES substitution table
pub const SBOX: [u8; 256] = build_sbox();

/// Inverse AES substitution table
pub const INV_SBOX: [u8; 256] = invert_table(&SBOX);

/// Substitutes each byte in a word using the AES S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let mut bytes = [0u8; 4];
    BigEndian::write_u32(&mut bytes, word);
    for b in bytes.iter_mut() {
        *b = SBOX[*b as usize];
    }
    BigEndian::read_u32(&bytes)
}

/// Type-level constants for AES-256
pub enum Aes256Algorithm {}

impl CipherAlgorithm for Aes256Algorithm {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

/// Expanded AES-256 key: one 16-byte matrix per round plus the initial
/// whitening key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys {
    keys: [Block; AES256_ROUND_KEYS],
}

impl RoundKeys {
    /// Performs AES-256 key expansion
    pub fn expand(key: &AesKey) -> Self {
        let mut words = [0u32; AES256_SCHEDULE_WORDS];

        for (i, chunk) in key.chunks_exact(4).enumerate() {
            words[i] = BigEndian::read_u32(chunk);
        }

        for i in AES256_KEY_WORDS..AES256_SCHEDULE_WORDS {
            let mut temp = words[i - 1];
            if i % AES256_KEY_WORDS == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ RCON[i / AES256_KEY_WORDS];
            } else if i % AES256_KEY_WORDS == 4 {
                temp = sub_word(temp);
            }
            words[i] = words[i - AES256_KEY_WORDS] ^ temp;
        }

        let mut keys = [[0u8; AES_BLOCK_SIZE]; AES256_ROUND_KEYS];
        for (round, key) in keys.iter_mut().enumerate() {
            for col in 0..4 {
                BigEndian::write_u32(&mut key[col * 4..col * 4 + 4], words[round * 4 + col]);
            }
        }
        words.zeroize();

        Self { keys }
    }

    /// Number of round keys (always 15)
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; a schedule never has zero rounds
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The round key for `round`, where 0 is the initial whitening key
    pub fn round(&self, round: usize) -> &Block {
        &self.keys[round]
    }

    /// Iterate round keys in application order
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.keys.iter()
    }
}

impl core::fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "RoundKeys<{}>([REDACTED])", self.keys.len())
    }
}

/// AES-256 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    round_keys: RoundKeys,
}

impl Aes256 {
    /// The expanded key this cipher was built with
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    /// SubBytes step
    fn sub_bytes(state: &mut Block) {
        for byte in state.iter_mut() {
            *byte = SBOX[*byte as usize];
        }
    }

    /// Inverse SubBytes
    fn inv_sub_bytes(state: &mut Block) {
        for byte in state.iter_mut() {
            *byte = INV_SBOX[*byte as usize];
        }
    }

    /// ShiftRows step: row r rotates left by r
    fn shift_rows(state: &mut Block) {
        let temp = *state;
        for r in 1..4 {
            for c in 0..4 {
                state[4 * c + r] = temp[4 * ((c + r) % 4) + r];
            }
        }
    }

    /// Inverse ShiftRows: row r rotates right by r
    fn inv_shift_rows(state: &mut Block) {
        let temp = *state;
        for r in 1..4 {
            for c in 0..4 {
                state[4 * ((c + r) % 4) + r] = temp[4 * c + r];
            }
        }
    }

    /// Multiply every column by `matrix` over GF(2^8)
    fn mix_with(state: &mut Block, matrix: &[[u8; 4]; 4]) {
        for c in 0..4 {
            let i = c * 4;
            let col = [state[i], state[i + 1], state[i + 2], state[i + 3]];
            for (r, row) in matrix.iter().enumerate() {
                state[i + r] = gf_mul(row[0], col[0])
                    ^ gf_mul(row[1], col[1])
                    ^ gf_mul(row[2], col[2])
                    ^ gf_mul(row[3], col[3]);
            }
        }
    }

    /// MixColumns step
    fn mix_columns(state: &mut Block) {
        Self::mix_with(state, &MIX);
    }

    /// Inverse MixColumns
    fn inv_mix_columns(state: &mut Block) {
        Self::mix_with(state, &INV_MIX);
    }

    /// AddRoundKey step
    fn add_round_key(state: &mut Block, round_key: &Block) {
        for (s, k) in state.iter_mut().zip(round_key.iter()) {
            *s ^= k;
        }
    }
}

impl BlockCipher for Aes256 {
    type Algorithm = Aes256Algorithm;
    type Key = AesKey;

    fn new(key: &Self::Key) -> Self {
        Aes256 {
            round_keys: RoundKeys::expand(key),
        }
    }

    fn encrypt_block(&self, block: &mut Block) {
        let keys = &self.round_keys;

        // Initial round - AddRoundKey
        Self::add_round_key(block, keys.round(0));

        // Main rounds
        for round in 1..AES256_ROUNDS {
            Self::sub_bytes(block);
            Self::shift_rows(block);
            Self::mix_columns(block);
            Self::add_round_key(block, keys.round(round));
        }

        // Final round
        Self::sub_bytes(block);
        Self::shift_rows(block);
        Self::add_round_key(block, keys.round(AES256_ROUNDS));
    }

    fn decrypt_block(&self, block: &mut Block) {
        let keys = &self.round_keys;

        // Initial round - AddRoundKey (final round key)
        Self::add_round_key(block, keys.round(AES256_ROUNDS));

        // Main rounds in reverse
        for round in (1..AES256_ROUNDS).rev() {
            Self::inv_shift_rows(block);
            Self::inv_sub_bytes(block);
            Self::add_round_key(block, keys.round(round));
            Self::inv_mix_columns(block);
        }

        // Final round
        Self::inv_shift_rows(block);
        Self::inv_sub_bytes(block);
        Self::add_round_key(block, keys.round(0));
    }
}
