#![no_main]

use libfuzzer_sys::fuzz_target;
use nanowork::engine::partition::message_words;
use nanowork::kernels::{narrow, wide};
use nanowork::{verify_work, work_digest, BlockHash};

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // 8 bytes of work, 32 bytes of block, 4 bytes of threshold
    if data.len() < 44 {
        return;
    }
    let mut work = [0u8; 8];
    work.copy_from_slice(&data[0..8]);
    let work = u64::from_le_bytes(work);
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&data[8..40]);
    let block = BlockHash::from_bytes(bytes);
    let threshold = u32::from_le_bytes([data[40], data[41], data[42], data[43]]);

    // =============================================================================
    // 1. BACKEND PARITY
    // =============================================================================

    let words = message_words(work, &block.words());
    let digest = wide::digest(&words);
    assert_eq!(digest, narrow::digest(&words), "wide and narrow kernels diverge");
    assert_eq!(digest, work_digest(&block, work));

    // =============================================================================
    // 2. THRESHOLD
    // =============================================================================

    assert_eq!(verify_work(&block, work, threshold), digest > threshold);
});
