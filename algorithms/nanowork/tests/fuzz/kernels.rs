use bolero::check;
use nanowork::kernels::constants::MESSAGE_WORDS;
use nanowork::kernels::{narrow, wide};

#[test]
fn fuzz_backend_parity() {
    check!()
        .with_type::<[u32; MESSAGE_WORDS]>()
        .for_each(|words| {
            assert_eq!(
                wide::digest(words),
                narrow::digest(words),
                "backends diverge on {words:08x?}"
            );
        });
}

#[test]
fn fuzz_verify_matches_threshold() {
    check!()
        .with_type::<(u64, [u8; 32], u32)>()
        .for_each(|(work, bytes, threshold)| {
            let block = nanowork::BlockHash::from_bytes(*bytes);
            let digest = nanowork::work_digest(&block, *work);
            assert_eq!(
                nanowork::verify_work(&block, *work, *threshold),
                digest > *threshold
            );
        });
}
