//! Work Digest Test Vectors
//!
//! Checks both kernel backends and `verify_work` against JSON vectors produced
//! by an independent BLAKE2b implementation (`digest_size = 8`, bytes 4..8
//! read little-endian).

#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]

use nanowork::engine::partition::message_words;
use nanowork::kernels::{narrow, wide};
use nanowork::{parse_work, verify_work, work_digest, BlockHash};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;

#[derive(Deserialize)]
struct Vector {
    name: String,
    block: String,
    work: String,
    digest: String,
    valid: bool,
}

#[derive(Deserialize)]
struct TestVectors {
    threshold: String,
    vectors: Vec<Vector>,
}

fn load() -> TestVectors {
    let file = File::open("tests/test_vectors.json").expect("Failed to open test_vectors.json");
    serde_json::from_reader(BufReader::new(file)).expect("Failed to parse JSON")
}

fn parse_u32(hex_str: &str) -> u32 {
    u32::from_str_radix(hex_str, 16).expect("Invalid hex in vector")
}

#[test]
fn test_digest_vectors() {
    let data = load();
    assert!(!data.vectors.is_empty());

    for v in &data.vectors {
        let block: BlockHash = v.block.parse().unwrap();
        let work = parse_work(&v.work).unwrap();
        let expected = parse_u32(&v.digest);
        let words = message_words(work, &block.words());

        assert_eq!(wide::digest(&words), expected, "wide kernel: {}", v.name);
        assert_eq!(narrow::digest(&words), expected, "narrow kernel: {}", v.name);
        assert_eq!(work_digest(&block, work), expected, "work_digest: {}", v.name);
    }
}

#[test]
fn test_validity_vectors() {
    let data = load();
    let threshold = parse_u32(&data.threshold);
    assert_eq!(threshold, nanowork::DEFAULT_THRESHOLD);

    for v in &data.vectors {
        let block: BlockHash = v.block.parse().unwrap();
        let work = parse_work(&v.work).unwrap();
        assert_eq!(verify_work(&block, work, threshold), v.valid, "{}", v.name);
    }
}
