//! Kernel Dispatcher
//!
//! Maps a [`Backend`] selector onto its kernel function.

use crate::config::Backend;
use crate::kernels;
use crate::types::KernelFn;

// =============================================================================
// DISPATCHER
// =============================================================================

/// Kernel implementing `backend`.
#[must_use]
pub fn get_kernel(backend: Backend) -> KernelFn {
    match backend {
        Backend::Wide => kernels::wide::digest,
        Backend::Narrow => kernels::narrow::digest,
    }
}

/// The fastest host kernel. Every target has 32-bit integer lanes, so this is
/// always the wide kernel.
#[must_use]
pub fn get_best_kernel() -> KernelFn {
    get_kernel(Backend::Wide)
}

/// Human-readable backend name.
#[must_use]
pub const fn backend_name(backend: Backend) -> &'static str {
    match backend {
        Backend::Wide => "Wide (32-bit lanes)",
        Backend::Narrow => "Narrow (8-bit lanes)",
    }
}

/// Name of the backend [`get_best_kernel`] returns.
#[must_use]
pub const fn get_active_backend_name() -> &'static str {
    backend_name(Backend::Wide)
}
