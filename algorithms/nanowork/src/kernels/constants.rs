//! Kernel Constants
//!
//! BLAKE2b parameters fixed to the single shape this solver ever hashes:
//!
//! ```text
//! input  = nonce (8 bytes, little-endian) || block hash (32 bytes)  -> 40 bytes
//! output = 8 bytes, unkeyed, one final block
//! ```
//!
//! Every 64-bit constant is stored as a `(low, high)` pair of 32-bit words so
//! the kernels never touch a native 64-bit integer.

// =============================================================================
// SHAPE
// =============================================================================

/// Digest length bound into the parameter block (bytes).
pub const OUT_LEN: u32 = 8;

/// Total input length: 8-byte nonce + 32-byte block hash.
pub const INPUT_LEN: u32 = 40;

/// Block hash length in bytes.
pub const BLOCK_HASH_LEN: usize = 32;

/// Message words fed to a kernel: 2 nonce words + 8 block hash words.
pub const MESSAGE_WORDS: usize = 10;

/// Parameter block word 0: `digest_length | key_length << 8 | fanout << 16 | depth << 24`.
pub const PARAM_WORD: u32 = 0x0101_0000 ^ OUT_LEN;

/// Mixing rounds.
pub const ROUNDS: usize = 12;

// =============================================================================
// DIFFICULTY
// =============================================================================

/// Reference difficulty: the upper digest half must exceed this value.
pub const DEFAULT_THRESHOLD: u32 = 0xFFFF_FFC0;

// =============================================================================
// INITIALIZATION VECTOR
// =============================================================================

/// BLAKE2b IV as interleaved `(low, high)` 32-bit words.
#[rustfmt::skip]
pub const IV32: [u32; 16] = [
    0xF3BC_C908, 0x6A09_E667, 0x84CA_A73B, 0xBB67_AE85,
    0xFE94_F82B, 0x3C6E_F372, 0x5F1D_36F1, 0xA54F_F53A,
    0xADE6_82D1, 0x510E_527F, 0x2B3E_6C1F, 0x9B05_688C,
    0xFB41_BD6B, 0x1F83_D9AB, 0x137E_2179, 0x5BE0_CD19,
];

// =============================================================================
// ROUND SCHEDULE
// =============================================================================

/// Working-vector indices touched by each of the 8 G calls in a round:
/// four columns followed by four diagonals.
#[rustfmt::skip]
pub const MIX_LANES: [[usize; 4]; 8] = [
    [0, 4,  8, 12],
    [1, 5,  9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7,  8, 13],
    [3, 4,  9, 14],
];

/// Message permutation indexed by `(round, call, slot)`.
///
/// Rounds 10 and 11 repeat rounds 0 and 1.
#[rustfmt::skip]
pub const SIGMA: [[[usize; 2]; 8]; ROUNDS] = [
    [[ 0,  1], [ 2,  3], [ 4,  5], [ 6,  7], [ 8,  9], [10, 11], [12, 13], [14, 15]],
    [[14, 10], [ 4,  8], [ 9, 15], [13,  6], [ 1, 12], [ 0,  2], [11,  7], [ 5,  3]],
    [[11,  8], [12,  0], [ 5,  2], [15, 13], [10, 14], [ 3,  6], [ 7,  1], [ 9,  4]],
    [[ 7,  9], [ 3,  1], [13, 12], [11, 14], [ 2,  6], [ 5, 10], [ 4,  0], [15,  8]],
    [[ 9,  0], [ 5,  7], [ 2,  4], [10, 15], [14,  1], [11, 12], [ 6,  8], [ 3, 13]],
    [[ 2, 12], [ 6, 10], [ 0, 11], [ 8,  3], [ 4, 13], [ 7,  5], [15, 14], [ 1,  9]],
    [[12,  5], [ 1, 15], [14, 13], [ 4, 10], [ 0,  7], [ 6,  3], [ 9,  2], [ 8, 11]],
    [[13, 11], [ 7, 14], [12,  1], [ 3,  9], [ 5,  0], [15,  4], [ 8,  6], [ 2, 10]],
    [[ 6, 15], [14,  9], [11,  3], [ 0,  8], [12,  2], [13,  7], [ 1,  4], [10,  5]],
    [[10,  2], [ 8,  4], [ 7,  6], [ 1,  5], [15, 11], [ 9, 14], [ 3, 12], [13,  0]],
    [[ 0,  1], [ 2,  3], [ 4,  5], [ 6,  7], [ 8,  9], [10, 11], [12, 13], [14, 15]],
    [[14, 10], [ 4,  8], [ 9, 15], [13,  6], [ 1, 12], [ 0,  2], [11,  7], [ 5,  3]],
];

// =============================================================================
// LANE GRID
// =============================================================================

/// Side of one lane tile: `x_pos` / `y_pos` each fit one nonce byte.
pub const TILE: u32 = 256;

/// Tiles per axis. The success marker stores `index + 1` in a byte, so
/// index 255 would wrap onto the "no success" sentinel.
pub const MAX_TILES_PER_AXIS: u32 = 255;
