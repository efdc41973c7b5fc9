//! Narrow-lane kernel: the same BLAKE2b-64 computation on byte lanes.
//!
//! Fallback for execution surfaces that only offer 8-bit integer lanes. Far
//! slower than [`crate::kernels::wide`] but bit-identical: additions ripple
//! a carry through eight bytes and the 32/24/16-bit rotations are byte
//! shuffles, leaving only the 63-bit rotation to need bit shifts.

use self::utils::{add, from_halves, not, rotr63, rotr_bytes, xor, Bytes64};
use crate::kernels::constants::{INPUT_LEN, IV32, MESSAGE_WORDS, MIX_LANES, PARAM_WORD, SIGMA};

mod utils;

#[inline]
fn mix(v: &mut [Bytes64; 16], [a, b, c, d]: [usize; 4], x: Bytes64, y: Bytes64) {
    v[a] = add(add(v[a], v[b]), x);
    v[d] = rotr_bytes::<4>(xor(v[d], v[a]));
    v[c] = add(v[c], v[d]);
    v[b] = rotr_bytes::<3>(xor(v[b], v[c]));
    v[a] = add(add(v[a], v[b]), y);
    v[d] = rotr_bytes::<2>(xor(v[d], v[a]));
    v[c] = add(v[c], v[d]);
    v[b] = rotr63(xor(v[b], v[c]));
}

/// Upper 32 bits of `BLAKE2b-64(nonce || block_hash)`, computed on byte lanes.
///
/// Same contract as [`crate::kernels::wide::digest`].
pub fn digest(words: &[u32; MESSAGE_WORDS]) -> u32 {
    let mut m = [[0u8; 8]; 16];
    for (slot, pair) in m.iter_mut().zip(words.chunks_exact(2)) {
        *slot = from_halves(pair[0], pair[1]);
    }

    let mut iv = [[0u8; 8]; 8];
    for (slot, pair) in iv.iter_mut().zip(IV32.chunks_exact(2)) {
        *slot = from_halves(pair[0], pair[1]);
    }
    let h0 = from_halves(IV32[0] ^ PARAM_WORD, IV32[1]);

    let mut v = [[0u8; 8]; 16];
    v[0] = h0;
    v[1..8].copy_from_slice(&iv[1..]);
    v[8..].copy_from_slice(&iv);

    // Byte counter: 40 lives entirely in lane 0.
    v[12][0] ^= INPUT_LEN.to_le_bytes()[0];
    v[14] = not(v[14]);

    for schedule in &SIGMA {
        for (lanes, [x, y]) in MIX_LANES.iter().zip(schedule) {
            mix(&mut v, *lanes, m[*x], m[*y]);
        }
    }

    let out = xor(xor(h0, v[0]), v[8]);
    u32::from_le_bytes([out[4], out[5], out[6], out[7]])
}
