//! Nanowork Frame Throughput Benchmark
//!
//! Whole-frame cost on the CPU surface: every lane hashed and encoded.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use nanowork::{Backend, BlockHash, CpuSurface, ExecutionSurface, FrameSeed, SolverConfig};
use rand::prelude::*;
use std::hint::black_box;

fn random_block() -> BlockHash {
    let mut bytes = [0u8; 32];
    rand::rng().fill(&mut bytes[..]);
    BlockHash::from_bytes(bytes)
}

// =============================================================================
// BENCHMARK 1: GRID SIZE
// =============================================================================

/// One frame per iteration at growing grid sizes.
fn bench_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Frame-Grid");
    group.sample_size(20);

    for side in [256u32, 512, 1024] {
        let config = SolverConfig {
            width: side,
            height: side,
            ..SolverConfig::default()
        };
        let mut surface = CpuSurface::new(&config);
        surface.load_block(&random_block()).unwrap();
        group.throughput(Throughput::Elements(config.lanes_per_frame()));

        group.bench_function(format!("{side}x{side}"), |b| {
            let mut seed = [0u8; 8];
            b.iter(|| {
                rand::rng().fill(&mut seed[..]);
                surface.dispatch(black_box(&FrameSeed(seed))).unwrap().len()
            });
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BACKEND PER FRAME
// =============================================================================

/// Default 512x512 frame on each kernel backend.
fn bench_frame_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Frame-Backend");
    group.sample_size(10);

    for backend in [Backend::Wide, Backend::Narrow] {
        let config = SolverConfig {
            backend,
            ..SolverConfig::default()
        };
        let mut surface = CpuSurface::new(&config);
        surface.load_block(&random_block()).unwrap();
        group.throughput(Throughput::Elements(config.lanes_per_frame()));

        group.bench_function(backend.to_string(), |b| {
            b.iter(|| surface.dispatch(black_box(&FrameSeed([7; 8]))).unwrap().len());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid, bench_frame_backends);
criterion_main!(benches);
