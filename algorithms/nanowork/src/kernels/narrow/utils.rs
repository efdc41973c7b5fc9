//! 64-bit word emulation on single bytes.
//!
//! Words are little-endian byte groups: `w[0]` is the least significant byte.

/// A 64-bit quantity held as eight byte lanes.
pub type Bytes64 = [u8; 8];

/// Split `(low, high)` 32-bit halves into byte lanes.
#[inline]
pub fn from_halves(lo: u32, hi: u32) -> Bytes64 {
    let l = lo.to_le_bytes();
    let h = hi.to_le_bytes();
    [l[0], l[1], l[2], l[3], h[0], h[1], h[2], h[3]]
}

/// Byte-serial addition; the carry ripples from lane 0 to lane 7 and the
/// final carry is dropped.
#[inline]
pub fn add(a: Bytes64, b: Bytes64) -> Bytes64 {
    let mut out = [0u8; 8];
    let mut carry = false;
    for (i, slot) in out.iter_mut().enumerate() {
        let (sum, c1) = a[i].overflowing_add(b[i]);
        let (sum, c2) = sum.overflowing_add(u8::from(carry));
        *slot = sum;
        carry = c1 || c2;
    }
    out
}

#[inline]
pub fn xor(a: Bytes64, b: Bytes64) -> Bytes64 {
    let mut out = a;
    for (slot, byte) in out.iter_mut().zip(b) {
        *slot ^= byte;
    }
    out
}

#[inline]
pub fn not(a: Bytes64) -> Bytes64 {
    a.map(|byte| !byte)
}

/// Rotate right by a whole number of bytes: output lane `i` takes lane `i + k`.
#[inline]
pub fn rotr_bytes<const K: usize>(a: Bytes64) -> Bytes64 {
    let mut out = a;
    out.rotate_left(K);
    out
}

/// Rotate right by 63 (left by one): each lane shifts up one bit and takes
/// the top bit of the lane below it, lane 0 takes the top bit of lane 7.
#[inline]
pub fn rotr63(a: Bytes64) -> Bytes64 {
    let mut out = [0u8; 8];
    for (i, slot) in out.iter_mut().enumerate() {
        let below = a[(i + 7) % 8];
        *slot = (a[i] << 1) | (below >> 7);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(w: Bytes64) -> u64 {
        u64::from_le_bytes(w)
    }

    #[test]
    fn test_matches_native_u64() {
        let samples = [
            0u64,
            1,
            0xFF,
            0x00FF_FFFF_FFFF_FFFF,
            0x8000_0000_0000_0001,
            0xDEAD_BEEF_CAFE_F00D,
            u64::MAX,
        ];
        for &a in &samples {
            let wa = a.to_le_bytes();
            for &b in &samples {
                let wb = b.to_le_bytes();
                assert_eq!(pack(add(wa, wb)), a.wrapping_add(b), "{a:x} + {b:x}");
                assert_eq!(pack(xor(wa, wb)), a ^ b);
            }
            assert_eq!(pack(not(wa)), !a);
            assert_eq!(pack(rotr_bytes::<4>(wa)), a.rotate_right(32));
            assert_eq!(pack(rotr_bytes::<3>(wa)), a.rotate_right(24));
            assert_eq!(pack(rotr_bytes::<2>(wa)), a.rotate_right(16));
            assert_eq!(pack(rotr63(wa)), a.rotate_right(63));
        }
    }

    #[test]
    fn test_from_halves_layout() {
        let w = from_halves(0x0403_0201, 0x0807_0605);
        assert_eq!(w, [1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
