//! Backend Comparison Benchmark
//!
//! Single-candidate cost of the wide and narrow kernels against the `blake2`
//! crate hashing the same 40 bytes.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use blake2::digest::{Update, VariableOutput};
use blake2::Blake2bVar;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use nanowork::engine::partition::message_words;
use nanowork::kernels;
use rand::prelude::*;
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("Nanowork Backends");
    group.throughput(Throughput::Elements(1));

    let mut block = [0u8; 32];
    rand::rng().fill(&mut block[..]);
    let block = nanowork::BlockHash::from_bytes(block);
    let words = message_words(0x0123_4567_89AB_CDEF, &block.words());

    // 1. Wide (Production Path)
    group.bench_function("Wide (32-bit lanes)", |b| {
        b.iter(|| kernels::wide::digest(black_box(&words)));
    });

    // 2. Narrow - byte-lane fallback
    group.bench_function("Narrow (8-bit lanes)", |b| {
        b.iter(|| kernels::narrow::digest(black_box(&words)));
    });

    // 3. Reference - general-purpose BLAKE2b, full 8-byte digest
    let mut input = [0u8; 40];
    input[..8].copy_from_slice(&0x0123_4567_89AB_CDEF_u64.to_le_bytes());
    input[8..].copy_from_slice(block.as_bytes());
    group.bench_function("blake2 crate", |b| {
        b.iter(|| {
            let mut hasher = Blake2bVar::new(8).unwrap();
            hasher.update(black_box(&input));
            let mut out = [0u8; 8];
            hasher.finalize_variable(&mut out).unwrap();
            out
        });
    });

    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
