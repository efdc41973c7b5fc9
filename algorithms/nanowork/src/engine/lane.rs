//! Threshold test and per-lane evaluation.

use crate::engine::partition::{encode_pixel, lane_nonce, message_words, Lane};
use crate::types::{FrameSeed, KernelFn, Pixel, NO_SUCCESS};

/// `digest > threshold`, strictly, as unsigned 32-bit values.
#[inline]
#[must_use]
pub const fn meets_threshold(digest: u32, threshold: u32) -> bool {
    digest > threshold
}

/// Hash one lane's candidate and encode the outcome.
#[inline]
#[must_use]
pub fn evaluate_lane(
    kernel: KernelFn,
    lane: Lane,
    seed: &FrameSeed,
    block: &[u32; 8],
    threshold: u32,
) -> Pixel {
    let words = message_words(lane_nonce(lane, seed), block);
    if meets_threshold(kernel(&words), threshold) {
        encode_pixel(lane)
    } else {
        NO_SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::constants::MESSAGE_WORDS;

    fn fixed_digest(words: &[u32; MESSAGE_WORDS]) -> u32 {
        // Digest equals the low nonce word: x_pos | y_pos << 8 | ...
        words[0]
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(meets_threshold(0xFFFF_FFC1, 0xFFFF_FFC0));
        assert!(!meets_threshold(0xFFFF_FFC0, 0xFFFF_FFC0));
        assert!(!meets_threshold(0, 0));
        assert!(meets_threshold(1, 0));
        assert!(!meets_threshold(u32::MAX, u32::MAX));
    }

    #[test]
    fn test_marker_iff_threshold_met() {
        let seed = FrameSeed([0; 8]);
        let block = [0u32; 8];
        let lane = Lane::new(5, 0);

        // digest = 5
        assert_eq!(evaluate_lane(fixed_digest, lane, &seed, &block, 4), [1, 1, 5, 0]);
        assert_eq!(evaluate_lane(fixed_digest, lane, &seed, &block, 5), NO_SUCCESS);
    }
}
