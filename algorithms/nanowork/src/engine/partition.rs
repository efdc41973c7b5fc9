//! Nonce Partition Scheme
//!
//! Every lane of the grid derives its own candidate from one shared frame
//! seed, so no per-lane input ever crosses to the device:
//!
//! ```text
//! nonce byte   0       1       2                3                4..7
//!              x_pos   y_pos   s2 ^ x_index     s3 ^ y_index     s4..s7
//! ```
//!
//! `x_pos`/`y_pos` locate the lane inside its 256x256 tile and
//! `x_index`/`y_index` name the tile. For a fixed seed the mapping is
//! injective over the whole grid. A successful lane reports
//! `(x_index + 1, y_index + 1, x_pos, y_pos)`, from which [`decode_pixel`]
//! rebuilds the nonce with the same seed.

use crate::kernels::constants::{MAX_TILES_PER_AXIS, MESSAGE_WORDS, TILE};
use crate::types::{FrameSeed, Pixel};

/// One lane's grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lane {
    /// Column in `[0, width)`.
    pub x: u32,
    /// Row in `[0, height)`.
    pub y: u32,
}

impl Lane {
    /// Lane at `(x, y)`. Both tile indices must stay below 255.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        debug_assert!(x / TILE < MAX_TILES_PER_AXIS && y / TILE < MAX_TILES_PER_AXIS);
        Self { x, y }
    }

    /// Column inside the tile.
    #[must_use]
    pub const fn x_pos(self) -> u8 {
        (self.x % TILE).to_le_bytes()[0]
    }

    /// Row inside the tile.
    #[must_use]
    pub const fn y_pos(self) -> u8 {
        (self.y % TILE).to_le_bytes()[0]
    }

    /// Tile column.
    #[must_use]
    pub const fn x_index(self) -> u8 {
        (self.x / TILE).to_le_bytes()[0]
    }

    /// Tile row.
    #[must_use]
    pub const fn y_index(self) -> u8 {
        (self.y / TILE).to_le_bytes()[0]
    }
}

// =============================================================================
// FORWARD MAPPING
// =============================================================================

/// Candidate nonce evaluated by `lane` under `seed`.
#[must_use]
pub const fn lane_nonce(lane: Lane, seed: &FrameSeed) -> u64 {
    let s = &seed.0;
    u64::from_le_bytes([
        lane.x_pos(),
        lane.y_pos(),
        s[2] ^ lane.x_index(),
        s[3] ^ lane.y_index(),
        s[4],
        s[5],
        s[6],
        s[7],
    ])
}

/// Kernel input for `nonce` against the block hash words.
#[must_use]
pub fn message_words(nonce: u64, block: &[u32; 8]) -> [u32; MESSAGE_WORDS] {
    let [b0, b1, b2, b3, b4, b5, b6, b7] = nonce.to_le_bytes();
    let mut words = [0u32; MESSAGE_WORDS];
    words[0] = u32::from_le_bytes([b0, b1, b2, b3]);
    words[1] = u32::from_le_bytes([b4, b5, b6, b7]);
    words[2..].copy_from_slice(block);
    words
}

// =============================================================================
// RESULT ENCODING
// =============================================================================

/// Success marker for `lane`.
#[must_use]
pub const fn encode_pixel(lane: Lane) -> Pixel {
    [
        lane.x_index().wrapping_add(1),
        lane.y_index().wrapping_add(1),
        lane.x_pos(),
        lane.y_pos(),
    ]
}

/// Nonce behind a success marker, or `None` for the no-success sentinel.
#[must_use]
pub const fn decode_pixel(pixel: Pixel, seed: &FrameSeed) -> Option<u64> {
    let [p0, p1, p2, p3] = pixel;
    if p0 == 0 {
        return None;
    }
    let s = &seed.0;
    Some(u64::from_le_bytes([
        p2,
        p3,
        s[2] ^ p0.wrapping_sub(1),
        s[3] ^ p1.wrapping_sub(1),
        s[4],
        s[5],
        s[6],
        s[7],
    ]))
}

/// Grid coordinate named by a success marker.
#[must_use]
pub const fn pixel_lane(pixel: Pixel) -> Lane {
    let [p0, p1, p2, p3] = pixel;
    Lane {
        x: (p0.wrapping_sub(1) as u32) * TILE + p2 as u32,
        y: (p1.wrapping_sub(1) as u32) * TILE + p3 as u32,
    }
}
