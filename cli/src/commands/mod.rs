//! CLI Commands
//!
//! All nanowork CLI commands organized as separate modules.

mod solve;
mod verify;

pub use solve::{solve_block, SolveArgs};
pub use verify::{verify_block, VerifyArgs};

// =============================================================================
// SHARED PARSERS
// =============================================================================

/// Parse a threshold as 8 hex digits, with or without `0x`.
fn parse_threshold(s: &str) -> Result<u32, String> {
    let digits = s.strip_prefix("0x").unwrap_or(s);
    if digits.len() != 8 {
        return Err(format!("expected 8 hex digits, got {s:?}"));
    }
    u32::from_str_radix(digits, 16).map_err(|e| format!("{s:?}: {e}"))
}
