//! Execution Engine
//!
//! Kernel dispatch, the nonce partition, per-lane evaluation and the
//! surfaces that run a whole frame.

pub mod dispatcher;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod lane;
pub mod partition;
pub mod surface;

pub use dispatcher::get_active_backend_name;
