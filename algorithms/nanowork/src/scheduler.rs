//! Search Scheduler
//!
//! Drives one frame at a time over an [`ExecutionSurface`]:
//!
//! ```text
//! frame += 1
//! seed   = fresh random bytes
//! every `progress_interval` frames: on_progress(frame) == true -> Cancelled
//! pixels = surface.dispatch(seed)
//! first non-zero pixel (row-major) -> Found(decode(pixel, seed))
//! otherwise wait for the pacer and repeat
//! ```
//!
//! Cancellation is only observed between frames; once a search is cancelled
//! no success callback fires.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use rand::prelude::*;

use crate::config::SolverConfig;
use crate::engine::partition::decode_pixel;
use crate::engine::surface::ExecutionSurface;
use crate::types::{BlockHash, FrameSeed, WorkError};
use crate::work::format_work;

// =============================================================================
// COLLABORATORS
// =============================================================================

/// Per-frame seed supplier.
pub trait SeedSource {
    /// Eight fresh bytes for the next frame.
    fn next_seed(&mut self) -> FrameSeed;
}

/// Seeds from the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSeeds;

impl SeedSource for RandomSeeds {
    fn next_seed(&mut self) -> FrameSeed {
        let mut bytes = [0u8; 8];
        rand::rng().fill(&mut bytes[..]);
        FrameSeed(bytes)
    }
}

impl<F: FnMut() -> FrameSeed> SeedSource for F {
    fn next_seed(&mut self) -> FrameSeed {
        self()
    }
}

/// Suspension point between frames.
pub trait FramePacer {
    /// Block until the next frame may start.
    fn wait(&mut self);
}

/// Yield the thread and go again.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl FramePacer for Immediate {
    fn wait(&mut self) {
        std::thread::yield_now();
    }
}

/// Start frames no closer together than a fixed interval.
#[derive(Debug, Clone)]
pub struct FixedRate {
    interval: Duration,
    last: Option<Instant>,
}

impl FixedRate {
    /// Pace frames `interval` apart.
    #[must_use]
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }
}

impl FramePacer for FixedRate {
    fn wait(&mut self) {
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            }
        }
        self.last = Some(Instant::now());
    }
}

/// Shared cancellation flag, checked at every frame boundary.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A fresh, uncancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; takes effect before the next frame.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// =============================================================================
// STATE
// =============================================================================

/// Lifecycle of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No frame dispatched yet.
    Idle,
    /// At least one frame dispatched, nothing found.
    Running,
    /// A lane met the threshold with this nonce.
    Found(u64),
    /// Cancelled by the progress callback or the token.
    Cancelled,
}

/// Result of a single [`Search::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame finished without a success; schedule another.
    Pending,
    /// Winning nonce.
    Found(u64),
    /// The search stopped before dispatching.
    Cancelled,
}

/// Final result of [`Search::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A work value was found and reported.
    Found {
        /// 16 lowercase hex digits, most-significant byte first.
        work: String,
        /// Frames dispatched.
        frames: u64,
        /// Lanes evaluated.
        lanes: u64,
    },
    /// The search was cancelled.
    Cancelled {
        /// Frames dispatched.
        frames: u64,
        /// Lanes evaluated.
        lanes: u64,
    },
}

// =============================================================================
// SEARCH
// =============================================================================

/// One proof-of-work search over a fixed block hash.
pub struct Search<S: ExecutionSurface> {
    surface: S,
    seeds: Box<dyn SeedSource>,
    pacer: Box<dyn FramePacer>,
    cancel: CancelToken,
    progress_interval: u64,
    state: SearchState,
    frame: u64,
    dispatched: u64,
    lanes: u64,
}

impl<S: ExecutionSurface> Search<S> {
    /// Bind `surface` to `block` with random seeds and the pacer `config`
    /// asks for.
    ///
    /// # Errors
    /// Whatever the surface reports while uploading the block.
    pub fn new(mut surface: S, block: &BlockHash, config: &SolverConfig) -> Result<Self, WorkError> {
        surface.load_block(block)?;
        let (width, height) = surface.dimensions();
        debug!(
            target: "nanowork::search",
            "{} surface {width}x{height} bound to block {block}",
            surface.name()
        );
        let pacer: Box<dyn FramePacer> = match config.frame_interval {
            Some(interval) => Box::new(FixedRate::new(interval)),
            None => Box::new(Immediate),
        };
        Ok(Self {
            surface,
            seeds: Box::new(RandomSeeds),
            pacer,
            cancel: CancelToken::new(),
            progress_interval: config.progress_interval,
            state: SearchState::Idle,
            frame: 0,
            dispatched: 0,
            lanes: u64::from(width) * u64::from(height),
        })
    }

    /// Replace the seed source.
    #[must_use]
    pub fn with_seeds(mut self, seeds: impl SeedSource + 'static) -> Self {
        self.seeds = Box::new(seeds);
        self
    }

    /// Replace the frame pacer.
    #[must_use]
    pub fn with_pacer(mut self, pacer: impl FramePacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    /// Share an external cancellation token.
    #[must_use]
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// A handle that cancels this search from elsewhere.
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SearchState {
        self.state
    }

    /// Frames dispatched so far.
    #[must_use]
    pub const fn frames(&self) -> u64 {
        self.dispatched
    }

    /// Lanes evaluated so far.
    #[must_use]
    pub const fn lanes_evaluated(&self) -> u64 {
        self.dispatched * self.lanes
    }

    /// Advance by one frame.
    ///
    /// Terminal states are sticky: once found or cancelled, further calls
    /// return the same outcome without dispatching.
    ///
    /// # Errors
    /// Surface failures; the search stays resumable.
    pub fn step(&mut self, on_progress: &mut dyn FnMut(u64) -> bool) -> Result<FrameOutcome, WorkError> {
        match self.state {
            SearchState::Found(nonce) => return Ok(FrameOutcome::Found(nonce)),
            SearchState::Cancelled => return Ok(FrameOutcome::Cancelled),
            SearchState::Idle | SearchState::Running => {}
        }

        if self.cancel.is_cancelled() {
            return Ok(self.cancelled("cancel token"));
        }

        self.frame += 1;
        let seed = self.seeds.next_seed();

        if self.progress_interval != 0 && self.frame % self.progress_interval == 0 {
            debug!(target: "nanowork::search", "progress checkpoint at frame {}", self.frame);
            if on_progress(self.frame) {
                return Ok(self.cancelled("progress callback"));
            }
        }

        self.state = SearchState::Running;
        let pixels = self.surface.dispatch(&seed)?;
        self.dispatched += 1;

        let hit = pixels
            .iter()
            .find(|pixel| pixel[0] != 0)
            .and_then(|pixel| decode_pixel(*pixel, &seed));

        Ok(hit.map_or(FrameOutcome::Pending, |nonce| {
            self.state = SearchState::Found(nonce);
            FrameOutcome::Found(nonce)
        }))
    }

    /// Step until a work value is found or the search is cancelled.
    ///
    /// `on_success` receives the work value exactly once, and never after a
    /// cancellation.
    ///
    /// # Errors
    /// The first surface failure aborts the search.
    pub fn run<F, P>(mut self, on_success: F, mut on_progress: P) -> Result<SearchOutcome, WorkError>
    where
        F: FnOnce(&str),
        P: FnMut(u64) -> bool,
    {
        info!(
            target: "nanowork::search",
            "search started on {} surface ({} lanes per frame)",
            self.surface.name(),
            self.lanes
        );
        loop {
            match self.step(&mut on_progress)? {
                FrameOutcome::Pending => self.pacer.wait(),
                FrameOutcome::Found(nonce) => {
                    let work = format_work(nonce);
                    info!(
                        target: "nanowork::search",
                        "work {work} found after {} frames",
                        self.dispatched
                    );
                    on_success(&work);
                    return Ok(SearchOutcome::Found {
                        work,
                        frames: self.dispatched,
                        lanes: self.lanes_evaluated(),
                    });
                }
                FrameOutcome::Cancelled => {
                    return Ok(SearchOutcome::Cancelled {
                        frames: self.dispatched,
                        lanes: self.lanes_evaluated(),
                    });
                }
            }
        }
    }

    fn cancelled(&mut self, by: &str) -> FrameOutcome {
        warn!(
            target: "nanowork::search",
            "search cancelled by {by} after {} frames",
            self.dispatched
        );
        self.state = SearchState::Cancelled;
        FrameOutcome::Cancelled
    }
}
