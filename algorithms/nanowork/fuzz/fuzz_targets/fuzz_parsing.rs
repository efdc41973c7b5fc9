#![no_main]

use libfuzzer_sys::fuzz_target;
use nanowork::{format_work, parse_work, BlockHash, WorkError};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = core::str::from_utf8(data) else {
        return;
    };

    // Work values: exactly 16 hex digits or InvalidWorkFormat
    match parse_work(text) {
        Ok(work) => assert_eq!(format_work(work), text.to_ascii_lowercase()),
        Err(e) => assert_eq!(e, WorkError::InvalidWorkFormat),
    }

    // Block hashes: exactly 64 hex digits or InvalidHashFormat
    match text.parse::<BlockHash>() {
        Ok(block) => assert_eq!(block.to_string(), text.to_ascii_uppercase()),
        Err(e) => assert_eq!(e, WorkError::InvalidHashFormat),
    }
});
