//! Wide-lane kernel: BLAKE2b-64 on 32-bit halves.
//!
//! One call hashes one 40-byte candidate (`nonce || block hash`) and returns
//! only the upper half of the 8-byte digest, which is all the threshold test
//! reads. Every 64-bit value is a `Word64` pair, so the same code shape maps
//! one-to-one onto 32-bit GPU shader arithmetic.

#![allow(clippy::inline_always)]

use self::utils::Word64;
use crate::kernels::constants::{INPUT_LEN, IV32, MESSAGE_WORDS, MIX_LANES, PARAM_WORD, SIGMA};

mod utils;

// =============================================================================
// STATE
// =============================================================================

/// IV as 64-bit pairs.
const IV: [Word64; 8] = {
    let mut iv = [Word64::ZERO; 8];
    let mut i = 0;
    while i < 8 {
        iv[i] = Word64::new(IV32[2 * i], IV32[2 * i + 1]);
        i += 1;
    }
    iv
};

/// Chain value word 0 after binding the output length into the parameter block.
const H0: Word64 = Word64::new(IV32[0] ^ PARAM_WORD, IV32[1]);

// =============================================================================
// LOGIC
// =============================================================================

/// G mixing function on four working-vector slots.
#[inline(always)]
fn mix(v: &mut [Word64; 16], [a, b, c, d]: [usize; 4], x: Word64, y: Word64) {
    v[a] = v[a].add(v[b]).add(x);
    v[d] = v[d].xor(v[a]).rotr32();
    v[c] = v[c].add(v[d]);
    v[b] = v[b].xor(v[c]).rotr24();
    v[a] = v[a].add(v[b]).add(y);
    v[d] = v[d].xor(v[a]).rotr16();
    v[c] = v[c].add(v[d]);
    v[b] = v[b].xor(v[c]).rotr63();
}

/// Load message words: nonce, then the block hash, then zero padding.
#[inline(always)]
fn load_message(words: &[u32; MESSAGE_WORDS]) -> [Word64; 16] {
    let mut m = [Word64::ZERO; 16];
    for (slot, pair) in m.iter_mut().zip(words.chunks_exact(2)) {
        *slot = Word64::new(pair[0], pair[1]);
    }
    m
}

// =============================================================================
// PUBLIC ENTRY POINT
// =============================================================================

/// Upper 32 bits of `BLAKE2b-64(nonce || block_hash)`.
///
/// `words[0..2]` hold the nonce (low word first), `words[2..10]` the block
/// hash as little-endian words.
pub fn digest(words: &[u32; MESSAGE_WORDS]) -> u32 {
    let m = load_message(words);

    let mut v = [Word64::ZERO; 16];
    v[0] = H0;
    v[1..8].copy_from_slice(&IV[1..]);
    v[8..].copy_from_slice(&IV);

    // Byte counter: 40 never reaches the counter's high half.
    v[12].lo ^= INPUT_LEN;
    // Final block flag.
    v[14] = v[14].not();

    for schedule in &SIGMA {
        for (lanes, [x, y]) in MIX_LANES.iter().zip(schedule) {
            mix(&mut v, *lanes, m[*x], m[*y]);
        }
    }

    H0.hi ^ v[0].hi ^ v[8].hi
}
