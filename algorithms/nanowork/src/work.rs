//! Work value text encoding.
//!
//! A work value is the nonce rendered most-significant byte first: 16 hex
//! digits, the form Nano nodes accept.

use crate::types::WorkError;

/// Render a nonce as 16 lowercase hex digits, most-significant byte first.
///
/// # Example
/// ```rust
/// assert_eq!(nanowork::format_work(0x2bf2_9ef0_0786_a6bc), "2bf29ef00786a6bc");
/// ```
#[must_use]
pub fn format_work(nonce: u64) -> String {
    hex::encode(nonce.to_be_bytes())
}

/// Parse 16 hex digits (either case) back into a nonce.
///
/// # Errors
/// [`WorkError::InvalidWorkFormat`] unless the input is exactly 16 hex digits.
pub fn parse_work(work: &str) -> Result<u64, WorkError> {
    let mut bytes = [0u8; 8];
    hex::decode_to_slice(work, &mut bytes).map_err(|_| WorkError::InvalidWorkFormat)?;
    Ok(u64::from_be_bytes(bytes))
}
