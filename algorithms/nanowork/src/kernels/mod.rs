//! Kernel Backends
//!
//! Per-lane implementations of the BLAKE2b-64 work digest. Both backends share
//! the [`crate::types::KernelFn`] signature so the dispatcher can swap them.

pub mod constants;
pub mod narrow;
pub mod wide;
