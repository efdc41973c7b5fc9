//! Public API Layer
//!
//! One-call solving and host-side verification of work values.

use subtle::ConstantTimeGreater;

use crate::config::SolverConfig;
use crate::engine::partition::message_words;
use crate::engine::surface::open_surface;
use crate::kernels;
use crate::scheduler::{Search, SearchOutcome};
use crate::types::{BlockHash, WorkError};

/// Progress callback type to name when passing no callback:
/// `solve(hash, on_success, None::<NoProgress>)`.
pub type NoProgress = fn(u64) -> bool;

// =============================================================================
// SOLVING
// =============================================================================

/// Search for a work value with the default configuration.
///
/// `on_success` receives the work value (16 lowercase hex digits) exactly
/// once. `on_progress`, if given, is called every 100 frames with the frame
/// count; returning `true` cancels the search.
///
/// # Errors
/// - [`WorkError::InvalidHashFormat`] before any execution surface is opened.
/// - [`WorkError::InvalidGrid`] if the configured grid is not whole tiles.
/// - Surface failures while opening or dispatching.
///
/// # Example
/// ```rust,no_run
/// use nanowork::{solve, NoProgress};
///
/// let hash = "718CC2121C3E641059BC1C2CFC45666C99E8AE922F7A807B7D07B62C995D79E2";
/// solve(hash, |work| println!("work: {work}"), None::<NoProgress>)?;
/// # Ok::<(), nanowork::WorkError>(())
/// ```
pub fn solve<F, P>(
    block_hex: &str,
    on_success: F,
    on_progress: Option<P>,
) -> Result<SearchOutcome, WorkError>
where
    F: FnOnce(&str),
    P: FnMut(u64) -> bool,
{
    solve_with(block_hex, &SolverConfig::default(), on_success, on_progress)
}

/// [`solve`] with an explicit configuration.
///
/// # Errors
/// As [`solve`].
pub fn solve_with<F, P>(
    block_hex: &str,
    config: &SolverConfig,
    on_success: F,
    on_progress: Option<P>,
) -> Result<SearchOutcome, WorkError>
where
    F: FnOnce(&str),
    P: FnMut(u64) -> bool,
{
    let block: BlockHash = block_hex.parse()?;
    let surface = open_surface(config)?;
    let mut on_progress = on_progress;
    Search::new(surface, &block, config)?.run(on_success, move |frame| {
        on_progress.as_mut().is_some_and(|progress| progress(frame))
    })
}

// =============================================================================
// VERIFICATION
// =============================================================================

/// Upper half of `BLAKE2b-64(work || block)` as the threshold test reads it.
#[must_use]
pub fn work_digest(block: &BlockHash, work: u64) -> u32 {
    kernels::wide::digest(&message_words(work, &block.words()))
}

/// Whether `work` meets `threshold` for `block`, compared in constant time.
///
/// # Example
/// ```rust
/// let block = "718CC2121C3E641059BC1C2CFC45666C99E8AE922F7A807B7D07B62C995D79E2".parse()?;
/// assert!(nanowork::verify_work(&block, 0x2bf2_9ef0_0786_a6bc, nanowork::DEFAULT_THRESHOLD));
/// # Ok::<(), nanowork::WorkError>(())
/// ```
#[must_use]
pub fn verify_work(block: &BlockHash, work: u64, threshold: u32) -> bool {
    work_digest(block, work).ct_gt(&threshold).into()
}
