//! Verify Command
//!
//! Check a work value against a block hash and threshold.

use super::parse_threshold;
use anyhow::{Context, Result};
use clap::Args;
use nanowork::BlockHash;

#[derive(Args)]
pub struct VerifyArgs {
    /// Block hash (64 hex digits)
    #[arg(value_name = "HASH")]
    hash: String,

    /// Work value (16 hex digits)
    #[arg(value_name = "WORK")]
    work: String,

    /// Difficulty threshold (8 hex digits)
    #[arg(short, long, env = "NANOWORK_THRESHOLD", default_value = "ffffffc0", value_parser = parse_threshold)]
    threshold: u32,
}

// =============================================================================
// VERIFY
// =============================================================================

/// Print the digest and verdict; returns whether the work is valid.
pub fn verify_block(args: &VerifyArgs) -> Result<bool> {
    let block: BlockHash = args
        .hash
        .parse()
        .with_context(|| format!("Invalid block hash: {}", args.hash))?;
    let work = nanowork::parse_work(&args.work)
        .with_context(|| format!("Invalid work value: {}", args.work))?;

    let digest = nanowork::work_digest(&block, work);
    let valid = nanowork::verify_work(&block, work, args.threshold);

    println!(
        "{}: {} (digest {digest:08x}, threshold {:08x})",
        args.work,
        if valid { "OK" } else { "FAILED" },
        args.threshold
    );
    Ok(valid)
}
