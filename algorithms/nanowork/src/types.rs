//! Shared types used across the nanowork library.

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::kernels::constants::{BLOCK_HASH_LEN, MESSAGE_WORDS};

// =============================================================================
// KERNEL INTERFACE
// =============================================================================

/// Unified kernel function signature: `message words -> upper digest half`.
///
/// `words[0..2]` carry the nonce (low word first) and `words[2..10]` the block
/// hash. Both the wide (32-bit) and narrow (8-bit) backends implement this
/// signature so the dispatcher can swap them.
pub type KernelFn = fn(&[u32; MESSAGE_WORDS]) -> u32;

/// One lane's output: `(x_index + 1, y_index + 1, x_pos, y_pos)` on success.
pub type Pixel = [u8; 4];

/// Pixel emitted by every lane that did not meet the threshold.
pub const NO_SUCCESS: Pixel = [0; 4];

// =============================================================================
// BLOCK HASH
// =============================================================================

/// The 32-byte block identifier a work value is searched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockHash([u8; BLOCK_HASH_LEN]);

impl BlockHash {
    /// Wrap raw bytes (in hex-string order).
    #[must_use]
    pub const fn from_bytes(bytes: [u8; BLOCK_HASH_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw bytes in hex-string order.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; BLOCK_HASH_LEN] {
        &self.0
    }

    /// The eight little-endian message words a kernel reads.
    #[must_use]
    pub fn words(&self) -> [u32; 8] {
        let mut words = [0u32; 8];
        for (word, chunk) in words.iter_mut().zip(self.0.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        words
    }
}

impl FromStr for BlockHash {
    type Err = WorkError;

    /// Accepts exactly 64 hex digits, either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; BLOCK_HASH_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| WorkError::InvalidHashFormat)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

// =============================================================================
// FRAME SEED
// =============================================================================

/// Eight random bytes shared by every lane of one frame.
///
/// Bytes 0 and 1 are drawn but never read: lane coordinates take their place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameSeed(pub [u8; 8]);

impl FrameSeed {
    /// Seed bytes `s2`, `s3` (mixed with the tile index).
    #[must_use]
    pub const fn low(&self) -> [u8; 2] {
        [self.0[2], self.0[3]]
    }

    /// Seed bytes `s4..s7` (nonce bytes 4..7 verbatim).
    #[must_use]
    pub const fn high(&self) -> [u8; 4] {
        [self.0[4], self.0[5], self.0[6], self.0[7]]
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors surfaced by the solver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkError {
    /// The execution surface could not be created, or a frame could not be
    /// read back.
    #[error("execution surface unavailable: {0}")]
    ContextUnavailable(String),

    /// The block identifier is not exactly 64 hex digits.
    #[error("block hash must be exactly 64 hexadecimal characters")]
    InvalidHashFormat,

    /// A grid axis is zero, not a multiple of 256, or over 255 tiles.
    #[error("grid {width}x{height} is not whole 256-lane tiles (at most 255 per axis)")]
    InvalidGrid {
        /// Requested width in lanes.
        width: u32,
        /// Requested height in lanes.
        height: u32,
    },

    /// A work value is not exactly 16 hex digits.
    #[error("work value must be exactly 16 hexadecimal characters")]
    InvalidWorkFormat,

    /// The compute kernel failed to compile; carries the compiler log.
    #[error("kernel compilation failed: {0}")]
    KernelCompilation(String),

    /// The compute pipeline failed to link; carries the linker log.
    #[error("kernel link failed: {0}")]
    KernelLink(String),
}
