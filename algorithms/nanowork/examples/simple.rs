//! Nanowork Basic Example
//!
//! Solves one block on the CPU with an easy threshold and checks the result.
//! Run with `RUST_LOG=debug` to see the search log.

#![allow(clippy::pedantic, clippy::nursery)]

use nanowork::{BlockHash, NoProgress, SolverConfig};

fn main() -> Result<(), nanowork::WorkError> {
    env_logger::init();

    let hash = "718CC2121C3E641059BC1C2CFC45666C99E8AE922F7A807B7D07B62C995D79E2";
    let config = SolverConfig {
        threshold: 0xFFF0_0000,
        ..SolverConfig::default()
    };

    let outcome = nanowork::solve_with(
        hash,
        &config,
        |work| println!("Work: {work}"),
        None::<NoProgress>,
    )?;
    println!("Outcome: {outcome:?}");

    // Known-good work value at the full network threshold
    let block: BlockHash = hash.parse()?;
    let work = nanowork::parse_work("2bf29ef00786a6bc")?;
    println!(
        "Digest: {:08x} (valid: {})",
        nanowork::work_digest(&block, work),
        nanowork::verify_work(&block, work, nanowork::DEFAULT_THRESHOLD)
    );
    Ok(())
}
