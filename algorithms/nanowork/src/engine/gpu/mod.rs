//! GPU Surface
//!
//! Runs the lane grid as a `wgpu` compute shader (`work.wgsl`), one
//! invocation per lane, and reads the whole pixel buffer back every frame.

use futures::executor::block_on;
use log::{debug, info};

use crate::config::SolverConfig;
use crate::engine::surface::ExecutionSurface;
use crate::types::{BlockHash, FrameSeed, Pixel, WorkError, NO_SUCCESS};

/// Invocations per workgroup along each axis; divides the 256-lane tile.
const WORKGROUP: u32 = 16;

/// Compute-shader execution surface.
pub struct GpuSurface {
    device: wgpu::Device,
    queue: wgpu::Queue,
    pipeline: wgpu::ComputePipeline,
    bind_group: wgpu::BindGroup,
    block_buffer: wgpu::Buffer,
    frame_buffer: wgpu::Buffer,
    pixel_buffer: wgpu::Buffer,
    staging_buffer: wgpu::Buffer,
    width: u32,
    height: u32,
    threshold: u32,
    pixels: Vec<Pixel>,
}

impl GpuSurface {
    /// Acquire an adapter, compile the shader and allocate the frame buffers.
    ///
    /// # Errors
    /// - [`WorkError::ContextUnavailable`]: no adapter/device, or the grid
    ///   does not fit a storage binding.
    /// - [`WorkError::KernelCompilation`]: shader validation failed.
    /// - [`WorkError::KernelLink`]: pipeline creation failed.
    pub fn new(config: &SolverConfig) -> Result<Self, WorkError> {
        block_on(Self::init(config))
    }

    async fn init(config: &SolverConfig) -> Result<Self, WorkError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                ..Default::default()
            })
            .await
            .map_err(|e| WorkError::ContextUnavailable(e.to_string()))?;

        let info = adapter.get_info();
        info!(
            target: "nanowork::gpu",
            "GPU adapter: {} (Backend: {:?})",
            info.name,
            info.backend
        );

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("nanowork device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults(),
                memory_hints: wgpu::MemoryHints::default(),
                ..Default::default()
            })
            .await
            .map_err(|e| WorkError::ContextUnavailable(e.to_string()))?;

        let lanes = u64::from(config.width) * u64::from(config.height);
        let pixel_bytes = lanes * 4;
        let limit = u64::from(device.limits().max_storage_buffer_binding_size);
        if pixel_bytes > limit {
            return Err(WorkError::ContextUnavailable(format!(
                "{}x{} grid needs {pixel_bytes} bytes, storage binding limit is {limit}",
                config.width, config.height
            )));
        }

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("nanowork shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("work.wgsl").into()),
        });
        if let Some(err) = device.pop_error_scope().await {
            return Err(WorkError::KernelCompilation(err.to_string()));
        }

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("nanowork pipeline"),
            layout: None,
            module: &shader,
            entry_point: Some("search_main"),
            compilation_options: wgpu::PipelineCompilationOptions::default(),
            cache: None,
        });
        if let Some(err) = device.pop_error_scope().await {
            return Err(WorkError::KernelLink(err.to_string()));
        }
        debug!(target: "nanowork::gpu", "pipeline ready");

        // Pixels: one packed u32 per lane
        let pixel_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("pixel buffer"),
            size: pixel_bytes,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });

        let staging_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("staging buffer"),
            size: pixel_bytes,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Block: 8 u32s
        let block_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("block buffer"),
            size: 32,
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // Frame: seed_lo, seed_hi, threshold, width
        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame buffer"),
            size: 16,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("nanowork bind group"),
            layout: &pipeline.get_bind_group_layout(0),
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: pixel_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: block_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: frame_buffer.as_entire_binding(),
                },
            ],
        });

        let pixel_count = usize::try_from(lanes)
            .map_err(|e| WorkError::ContextUnavailable(e.to_string()))?;

        Ok(Self {
            device,
            queue,
            pipeline,
            bind_group,
            block_buffer,
            frame_buffer,
            pixel_buffer,
            staging_buffer,
            width: config.width,
            height: config.height,
            threshold: config.threshold,
            pixels: vec![NO_SUCCESS; pixel_count],
        })
    }

    /// Copy the mapped staging buffer into the host pixel grid.
    fn read_back(&mut self) -> Result<(), WorkError> {
        let slice = self.staging_buffer.slice(..);
        let (tx, rx) = futures::channel::oneshot::channel();
        slice.map_async(wgpu::MapMode::Read, move |result| {
            let _ = tx.send(result);
        });
        self.device
            .poll(wgpu::PollType::Wait {
                submission_index: None,
                timeout: None,
            })
            .map_err(|e| WorkError::ContextUnavailable(e.to_string()))?;

        block_on(rx)
            .map_err(|_| WorkError::ContextUnavailable("frame readback dropped".into()))?
            .map_err(|e| WorkError::ContextUnavailable(e.to_string()))?;

        {
            let data = slice.get_mapped_range();
            let words: &[u32] = bytemuck::cast_slice(&data);
            for (pixel, word) in self.pixels.iter_mut().zip(words) {
                *pixel = word.to_le_bytes();
            }
        }
        self.staging_buffer.unmap();
        Ok(())
    }
}

impl ExecutionSurface for GpuSurface {
    fn name(&self) -> &'static str {
        "gpu"
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn load_block(&mut self, block: &BlockHash) -> Result<(), WorkError> {
        self.queue
            .write_buffer(&self.block_buffer, 0, bytemuck::cast_slice(&block.words()));
        Ok(())
    }

    fn dispatch(&mut self, seed: &FrameSeed) -> Result<&[Pixel], WorkError> {
        let s = &seed.0;
        let frame = [
            u32::from_le_bytes([s[0], s[1], s[2], s[3]]),
            u32::from_le_bytes([s[4], s[5], s[6], s[7]]),
            self.threshold,
            self.width,
        ];
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::cast_slice(&frame));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
        {
            let mut cpass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
                label: None,
                timestamp_writes: None,
            });
            cpass.set_pipeline(&self.pipeline);
            cpass.set_bind_group(0, &self.bind_group, &[]);
            cpass.dispatch_workgroups(self.width / WORKGROUP, self.height / WORKGROUP, 1);
        }
        encoder.copy_buffer_to_buffer(
            &self.pixel_buffer,
            0,
            &self.staging_buffer,
            0,
            self.pixel_buffer.size(),
        );
        self.queue.submit(Some(encoder.finish()));

        self.read_back()?;
        Ok(&self.pixels)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::engine::surface::CpuSurface;

    const NANO_BLOCK: &str = "718CC2121C3E641059BC1C2CFC45666C99E8AE922F7A807B7D07B62C995D79E2";

    fn open_or_skip(config: &SolverConfig) -> Option<GpuSurface> {
        match GpuSurface::new(config) {
            Ok(surface) => Some(surface),
            Err(WorkError::ContextUnavailable(reason)) => {
                println!("no GPU adapter, skipping: {reason}");
                None
            }
            Err(e) => panic!("shader failed to build: {e}"),
        }
    }

    #[test]
    fn test_shader_matches_cpu_pixels() {
        let config = SolverConfig {
            width: 256,
            height: 256,
            threshold: 0x8000_0000,
            ..SolverConfig::default()
        };
        let Some(mut gpu) = open_or_skip(&config) else {
            return;
        };
        let mut cpu = CpuSurface::new(&config);

        let block: BlockHash = NANO_BLOCK.parse().unwrap();
        gpu.load_block(&block).unwrap();
        cpu.load_block(&block).unwrap();

        for seed in [
            FrameSeed([0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88]),
            FrameSeed([0xFF, 0x00, 0xA5, 0x5A, 0x01, 0x80, 0xFE, 0x7F]),
        ] {
            let expected = cpu.dispatch(&seed).unwrap().to_vec();
            let actual = gpu.dispatch(&seed).unwrap();
            assert_eq!(actual.len(), expected.len());
            let hits = expected.iter().filter(|p| **p != NO_SUCCESS).count();
            assert!(hits > 0 && hits < expected.len(), "threshold too tight or loose");
            if let Some(index) = (0..expected.len()).find(|&i| actual[i] != expected[i]) {
                panic!(
                    "lane ({}, {}) seed {seed:?}: gpu {:?}, cpu {:?}",
                    index % 256,
                    index / 256,
                    actual[index],
                    expected[index]
                );
            }
        }
    }
}
