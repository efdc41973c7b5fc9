//! # Nanowork
//!
//! Parallel proof-of-work solver for Nano-style blocks: finds an 8-byte work
//! value whose `BLAKE2b-64(work || block_hash)` clears a difficulty threshold.
//! Each frame fans a random seed out over a grid of lanes (rayon threads or a
//! `wgpu` compute shader), every lane hashing its own nonce candidate.

//! # Usage
//! ```rust,no_run
//! use nanowork::{SolverConfig, NoProgress};
//!
//! let hash = "718CC2121C3E641059BC1C2CFC45666C99E8AE922F7A807B7D07B62C995D79E2";
//!
//! // 1. Solve with defaults (512x512 lanes, threshold 0xFFFFFFC0)
//! nanowork::solve(hash, |work| println!("{work}"), None::<NoProgress>)?;
//!
//! // 2. Cancel from the progress callback
//! let config = SolverConfig { progress_interval: 10, ..SolverConfig::default() };
//! nanowork::solve_with(hash, &config, |_| {}, Some(|frame: u64| frame >= 50))?;
//!
//! // 3. Check a work value
//! let block = hash.parse()?;
//! let valid = nanowork::verify_work(&block, 0x2bf2_9ef0_0786_a6bc, nanowork::DEFAULT_THRESHOLD);
//! assert!(valid);
//! # Ok::<(), nanowork::WorkError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

mod api;
mod config;
pub mod engine;
// Kernels are public for benches and fuzz targets, but hidden from docs
#[doc(hidden)]
pub mod kernels;
mod scheduler;
mod types;
mod work;

// =============================================================================
// EXPORTS
// =============================================================================

pub use api::{solve, solve_with, verify_work, work_digest, NoProgress};
pub use config::{Backend, SolverConfig, SurfaceKind, DEFAULT_GRID, DEFAULT_PROGRESS_INTERVAL};
pub use engine::surface::{open_surface, CpuSurface, ExecutionSurface};
pub use kernels::constants::{DEFAULT_THRESHOLD, MAX_TILES_PER_AXIS};
pub use scheduler::{
    CancelToken, FixedRate, FrameOutcome, FramePacer, Immediate, RandomSeeds, Search,
    SearchOutcome, SearchState, SeedSource,
};
pub use types::{BlockHash, FrameSeed, KernelFn, Pixel, WorkError, NO_SUCCESS};
pub use work::{format_work, parse_work};

#[cfg(feature = "gpu")]
pub use engine::gpu::GpuSurface;

/// Returns the name of the host kernel backend used by default.
#[must_use]
pub fn active_backend() -> &'static str {
    engine::get_active_backend_name()
}
