//! 64-bit word emulation on 32-bit halves.

#![allow(clippy::inline_always)]

/// A 64-bit quantity held as two 32-bit halves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Word64 {
    pub lo: u32,
    pub hi: u32,
}

impl Word64 {
    pub const ZERO: Self = Self { lo: 0, hi: 0 };

    pub const fn new(lo: u32, hi: u32) -> Self {
        Self { lo, hi }
    }

    /// Addition with the low-half overflow carried into the high half.
    #[inline(always)]
    pub const fn add(self, other: Self) -> Self {
        let lo = self.lo.wrapping_add(other.lo);
        let carry = (lo < self.lo) as u32;
        Self {
            lo,
            hi: self.hi.wrapping_add(other.hi).wrapping_add(carry),
        }
    }

    #[inline(always)]
    pub const fn xor(self, other: Self) -> Self {
        Self {
            lo: self.lo ^ other.lo,
            hi: self.hi ^ other.hi,
        }
    }

    #[inline(always)]
    pub const fn not(self) -> Self {
        Self {
            lo: !self.lo,
            hi: !self.hi,
        }
    }

    /// Rotate right by 32: the halves trade places.
    #[inline(always)]
    pub const fn rotr32(self) -> Self {
        Self {
            lo: self.hi,
            hi: self.lo,
        }
    }

    #[inline(always)]
    pub const fn rotr24(self) -> Self {
        Self {
            lo: (self.lo >> 24) | (self.hi << 8),
            hi: (self.hi >> 24) | (self.lo << 8),
        }
    }

    #[inline(always)]
    pub const fn rotr16(self) -> Self {
        Self {
            lo: (self.lo >> 16) | (self.hi << 16),
            hi: (self.hi >> 16) | (self.lo << 16),
        }
    }

    /// Rotate right by 63, i.e. left by one.
    #[inline(always)]
    pub const fn rotr63(self) -> Self {
        Self {
            lo: (self.hi >> 31) | (self.lo << 1),
            hi: (self.lo >> 31) | (self.hi << 1),
        }
    }
}

#[cfg(test)]
#[allow(clippy::cast_possible_truncation)]
mod tests {
    use super::*;

    fn pack(w: Word64) -> u64 {
        (u64::from(w.hi) << 32) | u64::from(w.lo)
    }

    fn split(x: u64) -> Word64 {
        Word64::new(x as u32, (x >> 32) as u32)
    }

    #[test]
    fn test_add_carries_into_high_half() {
        let a = Word64::new(0xFFFF_FFFF, 0);
        let b = Word64::new(1, 0);
        assert_eq!(a.add(b), Word64::new(0, 1));

        let wrap = Word64::new(0xFFFF_FFFF, 0xFFFF_FFFF).add(Word64::new(1, 0));
        assert_eq!(wrap, Word64::ZERO, "full 64-bit wraparound");
    }

    #[test]
    fn test_matches_native_u64() {
        let samples = [
            0u64,
            1,
            0x8000_0000_0000_0000,
            0xDEAD_BEEF_CAFE_F00D,
            0x0123_4567_89AB_CDEF,
            u64::MAX,
        ];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(pack(split(a).add(split(b))), a.wrapping_add(b));
                assert_eq!(pack(split(a).xor(split(b))), a ^ b);
            }
            assert_eq!(pack(split(a).rotr32()), a.rotate_right(32));
            assert_eq!(pack(split(a).rotr24()), a.rotate_right(24));
            assert_eq!(pack(split(a).rotr16()), a.rotate_right(16));
            assert_eq!(pack(split(a).rotr63()), a.rotate_right(63));
            assert_eq!(pack(split(a).not()), !a);
        }
    }
}
