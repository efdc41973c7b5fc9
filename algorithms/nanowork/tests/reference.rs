//! Reference Parity
//!
//! Compares both kernel backends with the `blake2` crate's BLAKE2b
//! (unkeyed, 8-byte output) over random and edge-case inputs.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use blake2::digest::{Update, VariableOutput};
use blake2::Blake2bVar;
use nanowork::engine::partition::message_words;
use nanowork::kernels::{narrow, wide};
use nanowork::BlockHash;

fn reference(nonce: u64, block: &[u8; 32]) -> u32 {
    let mut hasher = Blake2bVar::new(8).unwrap();
    hasher.update(&nonce.to_le_bytes());
    hasher.update(block);
    let mut out = [0u8; 8];
    hasher.finalize_variable(&mut out).unwrap();
    u32::from_le_bytes([out[4], out[5], out[6], out[7]])
}

fn check(nonce: u64, block: [u8; 32]) {
    let words = message_words(nonce, &BlockHash::from_bytes(block).words());
    let expected = reference(nonce, &block);
    assert_eq!(wide::digest(&words), expected, "wide: nonce {nonce:016x}");
    assert_eq!(narrow::digest(&words), expected, "narrow: nonce {nonce:016x}");
}

#[test]
fn test_edge_inputs() {
    for nonce in [0, 1, 0xFF, 0xFFFF_FFFF, 0x1_0000_0000, u64::MAX] {
        check(nonce, [0; 32]);
        check(nonce, [0xFF; 32]);
    }
}

#[test]
fn test_random_inputs() {
    use rand::prelude::*;
    let mut rng = rand::rng();
    for _ in 0..500 {
        let mut block = [0u8; 32];
        rng.fill(&mut block[..]);
        let mut nonce = [0u8; 8];
        rng.fill(&mut nonce[..]);
        check(u64::from_le_bytes(nonce), block);
    }
}
