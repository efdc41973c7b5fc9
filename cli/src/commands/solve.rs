//! Solve Command
//!
//! Search for a work value for one block hash.

use super::parse_threshold;
use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use nanowork::{Backend, SearchOutcome, SolverConfig, SurfaceKind};
use std::time::{Duration, Instant};

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Kernel backend.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum BackendArg {
    /// 32-bit lanes (fast)
    Wide,
    /// 8-bit lanes
    Narrow,
}

/// Execution surface.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SurfaceArg {
    /// Host threads
    Cpu,
    /// wgpu compute shader (requires the `gpu` feature)
    Gpu,
}

#[derive(Args)]
pub struct SolveArgs {
    /// Block hash (64 hex digits)
    #[arg(value_name = "HASH")]
    hash: String,

    /// Difficulty threshold (8 hex digits)
    #[arg(short, long, env = "NANOWORK_THRESHOLD", default_value = "ffffffc0", value_parser = parse_threshold)]
    threshold: u32,

    /// Grid width in lanes (multiple of 256, at most 65280)
    #[arg(long, env = "NANOWORK_WIDTH", default_value_t = nanowork::DEFAULT_GRID, value_parser = parse_axis)]
    width: u32,

    /// Grid height in lanes (multiple of 256, at most 65280)
    #[arg(long, env = "NANOWORK_HEIGHT", default_value_t = nanowork::DEFAULT_GRID, value_parser = parse_axis)]
    height: u32,

    /// Kernel backend for the CPU surface
    #[arg(short, long, env = "NANOWORK_BACKEND", value_enum, default_value_t = BackendArg::Wide)]
    backend: BackendArg,

    /// Execution surface
    #[arg(short, long, env = "NANOWORK_SURFACE", value_enum, default_value_t = SurfaceArg::Cpu)]
    surface: SurfaceArg,

    /// Frames between progress reports
    #[arg(long, env = "NANOWORK_PROGRESS_INTERVAL", default_value_t = nanowork::DEFAULT_PROGRESS_INTERVAL)]
    progress_interval: u64,

    /// Minimum time per frame in milliseconds
    #[arg(long, env = "NANOWORK_FRAME_INTERVAL_MS")]
    frame_interval_ms: Option<u64>,

    /// Give up at the first progress report at or past this frame
    /// (needs a non-zero progress interval)
    #[arg(long, env = "NANOWORK_MAX_FRAMES")]
    max_frames: Option<u64>,
}

impl SolveArgs {
    /// Reject flag combinations clap cannot express.
    fn validate(&self) -> Result<()> {
        if self.max_frames.is_some() && self.progress_interval == 0 {
            bail!("--max-frames is checked at progress reports; it needs --progress-interval > 0");
        }
        Ok(())
    }

    fn config(&self) -> SolverConfig {
        SolverConfig {
            width: self.width,
            height: self.height,
            threshold: self.threshold,
            progress_interval: self.progress_interval,
            backend: match self.backend {
                BackendArg::Wide => Backend::Wide,
                BackendArg::Narrow => Backend::Narrow,
            },
            surface: match self.surface {
                SurfaceArg::Cpu => SurfaceKind::Cpu,
                SurfaceArg::Gpu => SurfaceKind::Gpu,
            },
            frame_interval: self.frame_interval_ms.map(Duration::from_millis),
        }
    }
}

/// Grid axis: a multiple of 256 with at most 255 tiles.
fn parse_axis(s: &str) -> Result<u32, String> {
    let len: u32 = s.parse().map_err(|e| format!("{s:?}: {e}"))?;
    if SolverConfig::axis_is_valid(len) {
        Ok(len)
    } else {
        Err(format!(
            "{len} is not a non-zero multiple of 256 up to {}",
            256 * nanowork::MAX_TILES_PER_AXIS
        ))
    }
}

// =============================================================================
// SOLVE
// =============================================================================

/// Run a search and print the work value on stdout.
pub fn solve_block(args: &SolveArgs) -> Result<()> {
    args.validate()?;
    let config = args.config();
    let lanes_per_frame = config.lanes_per_frame();
    let started = Instant::now();

    let outcome = nanowork::solve_with(
        &args.hash,
        &config,
        |_| {},
        Some(|frame: u64| {
            let secs = started.elapsed().as_secs_f64().max(f64::EPSILON);
            #[allow(clippy::cast_precision_loss)]
            let rate = (frame * lanes_per_frame) as f64 / secs / 1e6;
            log::info!("frame {frame}: {rate:.1} MH/s");
            args.max_frames.is_some_and(|max| frame >= max)
        }),
    )
    .with_context(|| format!("Failed to solve block {}", args.hash))?;

    match outcome {
        SearchOutcome::Found { work, frames, lanes } => {
            log::info!(
                "found in {frames} frames ({lanes} hashes, {:.2?})",
                started.elapsed()
            );
            println!("{work}");
            Ok(())
        }
        SearchOutcome::Cancelled { frames, .. } => {
            bail!("Gave up after {frames} frames without a solution")
        }
    }
}
