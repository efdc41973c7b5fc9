//! Solver configuration.
//!
//! Everything a search needs besides the block hash, passed at call time.

use core::fmt;
use core::time::Duration;

use crate::kernels::constants::{DEFAULT_THRESHOLD, MAX_TILES_PER_AXIS, TILE};

/// Default grid side in lanes.
pub const DEFAULT_GRID: u32 = 512;

/// Default number of frames between progress callbacks.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100;

// =============================================================================
// SELECTORS
// =============================================================================

/// Per-lane kernel backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
    /// 64-bit words as two 32-bit halves.
    #[default]
    Wide,
    /// 64-bit words as eight byte lanes.
    Narrow,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Wide => "wide",
            Self::Narrow => "narrow",
        })
    }
}

/// Where lanes execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceKind {
    /// Host threads.
    #[default]
    Cpu,
    /// A compute shader through `wgpu` (feature `gpu`).
    Gpu,
}

impl fmt::Display for SurfaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
        })
    }
}

// =============================================================================
// CONFIG
// =============================================================================

/// Search parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Grid width in lanes; a multiple of 256.
    pub width: u32,
    /// Grid height in lanes; a multiple of 256.
    pub height: u32,
    /// A lane succeeds when its digest half is strictly greater than this.
    pub threshold: u32,
    /// Frames between progress callbacks; `0` disables them.
    pub progress_interval: u64,
    /// Kernel backend for the CPU surface. The GPU surface always runs the
    /// wide kernel.
    pub backend: Backend,
    /// Execution surface.
    pub surface: SurfaceKind,
    /// Target time per frame. `None` runs frames back to back.
    pub frame_interval: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_GRID,
            height: DEFAULT_GRID,
            threshold: DEFAULT_THRESHOLD,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            backend: Backend::Wide,
            surface: SurfaceKind::Cpu,
            frame_interval: None,
        }
    }
}

impl SolverConfig {
    /// Whether an axis length is usable: a non-zero multiple of 256 with at
    /// most 255 tiles.
    #[must_use]
    pub const fn axis_is_valid(len: u32) -> bool {
        len != 0 && len % TILE == 0 && len / TILE <= MAX_TILES_PER_AXIS
    }

    /// Whether both grid axes are usable.
    #[must_use]
    pub const fn grid_is_valid(&self) -> bool {
        Self::axis_is_valid(self.width) && Self::axis_is_valid(self.height)
    }

    /// Lanes evaluated per frame.
    #[must_use]
    pub const fn lanes_per_frame(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}
