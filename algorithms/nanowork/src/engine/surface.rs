//! Execution Surfaces
//!
//! A surface owns the lane grid: it holds the block words, evaluates every
//! lane of one frame and hands back the full pixel buffer in row-major order.

use log::debug;

use crate::config::{SolverConfig, SurfaceKind};
use crate::engine::dispatcher;
use crate::engine::lane::evaluate_lane;
use crate::engine::partition::Lane;
use crate::types::{BlockHash, FrameSeed, KernelFn, Pixel, WorkError, NO_SUCCESS};

// =============================================================================
// TRAIT
// =============================================================================

/// Parallel lane executor driven one frame at a time.
pub trait ExecutionSurface {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Grid `(width, height)` in lanes.
    fn dimensions(&self) -> (u32, u32);

    /// Replace the block hash every lane reads.
    ///
    /// # Errors
    /// Surface-specific upload failures.
    fn load_block(&mut self, block: &BlockHash) -> Result<(), WorkError>;

    /// Run one frame under `seed` and return `width * height` pixels,
    /// index `y * width + x`.
    ///
    /// # Errors
    /// [`WorkError::ContextUnavailable`] if the frame could not be read back.
    fn dispatch(&mut self, seed: &FrameSeed) -> Result<&[Pixel], WorkError>;
}

impl<S: ExecutionSurface + ?Sized> ExecutionSurface for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn dimensions(&self) -> (u32, u32) {
        (**self).dimensions()
    }

    fn load_block(&mut self, block: &BlockHash) -> Result<(), WorkError> {
        (**self).load_block(block)
    }

    fn dispatch(&mut self, seed: &FrameSeed) -> Result<&[Pixel], WorkError> {
        (**self).dispatch(seed)
    }
}

/// Open the surface `config` asks for.
///
/// # Errors
/// - [`WorkError::InvalidGrid`] unless both axes are whole tiles.
/// - [`WorkError::ContextUnavailable`] when the surface cannot be created,
///   including a GPU request in a build without the `gpu` feature.
pub fn open_surface(config: &SolverConfig) -> Result<Box<dyn ExecutionSurface>, WorkError> {
    if !config.grid_is_valid() {
        return Err(WorkError::InvalidGrid {
            width: config.width,
            height: config.height,
        });
    }
    match config.surface {
        SurfaceKind::Cpu => Ok(Box::new(CpuSurface::new(config))),
        #[cfg(feature = "gpu")]
        SurfaceKind::Gpu => Ok(Box::new(crate::engine::gpu::GpuSurface::new(config)?)),
        #[cfg(not(feature = "gpu"))]
        SurfaceKind::Gpu => Err(WorkError::ContextUnavailable(
            "built without the `gpu` feature".into(),
        )),
    }
}

// =============================================================================
// CPU SURFACE
// =============================================================================

/// Host surface: one kernel call per lane, rows spread over rayon's pool when
/// the `multithread` feature is on.
pub struct CpuSurface {
    kernel: KernelFn,
    width: u32,
    height: u32,
    threshold: u32,
    block: [u32; 8],
    pixels: Vec<Pixel>,
}

impl CpuSurface {
    /// Allocate a `width x height` grid running the configured backend.
    #[must_use]
    pub fn new(config: &SolverConfig) -> Self {
        let lanes = config.width as usize * config.height as usize;
        debug!(
            target: "nanowork::surface",
            "cpu surface {}x{} ({})",
            config.width,
            config.height,
            dispatcher::backend_name(config.backend)
        );
        Self {
            kernel: dispatcher::get_kernel(config.backend),
            width: config.width,
            height: config.height,
            threshold: config.threshold,
            block: [0; 8],
            pixels: vec![NO_SUCCESS; lanes],
        }
    }
}

impl ExecutionSurface for CpuSurface {
    fn name(&self) -> &'static str {
        "cpu"
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn load_block(&mut self, block: &BlockHash) -> Result<(), WorkError> {
        self.block = block.words();
        Ok(())
    }

    fn dispatch(&mut self, seed: &FrameSeed) -> Result<&[Pixel], WorkError> {
        let (kernel, block, threshold) = (self.kernel, self.block, self.threshold);
        let width = self.width;
        self.pixels
            .as_mut_slice()
            .process_rows(width, self.height, |y, row| {
                for (pixel, x) in row.iter_mut().zip(0..width) {
                    *pixel = evaluate_lane(kernel, Lane::new(x, y), seed, &block, threshold);
                }
            });
        Ok(&self.pixels)
    }
}

/// Helper for feature-agnostic row processing.
trait RowProcessor {
    fn process_rows<F>(self, width: u32, height: u32, f: F)
    where
        F: Fn(u32, &mut [Pixel]) + Sync + Send;
}

impl RowProcessor for &mut [Pixel] {
    fn process_rows<F>(self, width: u32, height: u32, f: F)
    where
        F: Fn(u32, &mut [Pixel]) + Sync + Send,
    {
        #[cfg(feature = "multithread")]
        {
            use rayon::prelude::*;
            self.par_chunks_mut(width as usize)
                .zip(0..height)
                .for_each(|(row, y)| f(y, row));
        }
        #[cfg(not(feature = "multithread"))]
        {
            for (row, y) in self.chunks_mut(width as usize).zip(0..height) {
                f(y, row);
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::engine::partition::{decode_pixel, lane_nonce};

    fn config(threshold: u32) -> SolverConfig {
        SolverConfig {
            width: 256,
            height: 256,
            threshold,
            ..SolverConfig::default()
        }
    }

    #[test]
    fn test_threshold_max_never_succeeds() {
        let mut surface = CpuSurface::new(&config(u32::MAX));
        surface.load_block(&BlockHash::from_bytes([0; 32])).unwrap();
        let pixels = surface.dispatch(&FrameSeed([9; 8])).unwrap();
        assert_eq!(pixels.len(), 256 * 256);
        assert!(pixels.iter().all(|p| *p == NO_SUCCESS));
    }

    #[test]
    fn test_threshold_zero_marks_nearly_every_lane() {
        let mut surface = CpuSurface::new(&config(0));
        surface.load_block(&BlockHash::from_bytes([0; 32])).unwrap();
        let seed = FrameSeed([1, 2, 3, 4, 5, 6, 7, 8]);
        let pixels = surface.dispatch(&seed).unwrap();

        // Row-major: pixel index y * width + x belongs to lane (x, y).
        for (index, pixel) in pixels.iter().enumerate().step_by(4099) {
            if *pixel == NO_SUCCESS {
                continue;
            }
            let (x, y) = (index % 256, index / 256);
            let lane = Lane::new(x.try_into().unwrap(), y.try_into().unwrap());
            assert_eq!(decode_pixel(*pixel, &seed), Some(lane_nonce(lane, &seed)));
        }
        let successes = pixels.iter().filter(|p| p[0] != 0).count();
        assert!(successes > 65_000, "only {successes} lanes beat threshold 0");
    }

    #[test]
    fn test_open_rejects_partial_tiles() {
        for (width, height) in [(0, 256), (256, 0), (300, 256), (256, 256 * 256)] {
            let config = SolverConfig {
                width,
                height,
                ..SolverConfig::default()
            };
            assert_eq!(
                open_surface(&config).err(),
                Some(WorkError::InvalidGrid { width, height })
            );
        }
    }

    #[cfg(not(feature = "gpu"))]
    #[test]
    fn test_gpu_request_without_feature() {
        let config = SolverConfig {
            surface: SurfaceKind::Gpu,
            ..SolverConfig::default()
        };
        assert!(matches!(open_surface(&config), Err(WorkError::ContextUnavailable(_))));
    }
}
