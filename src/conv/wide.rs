//! Exact 64 × 64 → 128 bit multiplication.
//!
//! Both digit generators lean on this for their interval arithmetic, so it must be exact for every
//! pair of operands. Two implementations are compiled: one through Rust's native `u128`, and a
//! portable one built from four 32-bit partial products. Which one [umul128] uses is decided at
//! build time; the `portable-wide` feature forces the portable path.

/// An unsigned 128-bit value as two 64-bit halves.
#[derive(Debug)]
#[derive(Clone, Copy, Default)]
#[derive(PartialEq, Eq)]
pub struct Uint128 {
    pub high: u64,
    pub low: u64,
}

impl Uint128 {
    #[inline]
    pub const fn new(high: u64, low: u64) -> Self {
        Uint128 { high, low }
    }
}

impl From<Uint128> for u128 {
    #[inline]
    fn from(x: Uint128) -> u128 {
        (x.high as u128) << 64 | x.low as u128
    }
}

impl From<u128> for Uint128 {
    #[inline]
    fn from(x: u128) -> Uint128 {
        Uint128 { high: (x >> 64) as u64, low: x as u64 }
    }
}

/// Exact product of `a` and `b`.
#[inline]
pub const fn umul128(a: u64, b: u64) -> Uint128 {
    #[cfg(all(target_pointer_width = "64", not(feature = "portable-wide")))]
    {
        umul128_native(a, b)
    }
    #[cfg(not(all(target_pointer_width = "64", not(feature = "portable-wide"))))]
    {
        umul128_portable(a, b)
    }
}

/// Exact product of `a` and `b`, through the compiler's 128-bit multiply.
#[inline]
pub const fn umul128_native(a: u64, b: u64) -> Uint128 {
    let p = a as u128 * b as u128;
    Uint128 { high: (p >> 64) as u64, low: p as u64 }
}

/// Exact product of `a` and `b`, using only 64-bit arithmetic.
///
/// Every operand is split into 32-bit halves; the middle column sums to at most `2^64 - 1`, so no
/// carry is ever lost.
#[inline]
pub const fn umul128_portable(a: u64, b: u64) -> Uint128 {
    let a_lo = a & 0xffff_ffff;
    let a_hi = a >> 32;
    let b_lo = b & 0xffff_ffff;
    let b_hi = b >> 32;

    let lo_lo = a_lo * b_lo;
    let hi_lo = a_hi * b_lo;
    let lo_hi = a_lo * b_hi;
    let hi_hi = a_hi * b_hi;

    let cross = (lo_lo >> 32) + (hi_lo & 0xffff_ffff) + lo_hi;
    let high = (hi_lo >> 32) + (cross >> 32) + hi_hi;
    let low = (cross << 32) | (lo_lo & 0xffff_ffff);

    Uint128 { high, low }
}

/// Computes `floor(g * cp / 2^128)` where `g = hi * 2^64 + lo`, forcing the lowest bit to 1 if any
/// of the discarded bits (other than the very last one) were set.
///
/// Rounding to odd this way keeps enough information to compare the product against exact
/// decimal boundaries.
#[inline]
pub const fn round_to_odd_64(hi: u64, lo: u64, cp: u64) -> u64 {
    let x = umul128(lo, cp);
    let y = umul128(hi, cp);
    let (y0, carry) = y.low.overflowing_add(x.high);
    let y1 = y.high + carry as u64;
    y1 | (y0 > 1) as u64
}

/// As [round_to_odd_64], for a 64-bit `g = hi * 2^32 + lo` and a 32-bit `cp`.
#[inline]
pub const fn round_to_odd_32(hi: u32, lo: u32, cp: u32) -> u32 {
    let g = (hi as u64) << 32 | lo as u64;
    let p = umul128(g, cp as u64);
    let y1 = p.high as u32;
    let y0 = p.low >> 32;
    y1 | (y0 > 1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_products() {
        assert_eq!(umul128(0, 0), Uint128::new(0, 0));
        assert_eq!(umul128(1, 1), Uint128::new(0, 1));
        assert_eq!(umul128(10, u64::MAX), Uint128::new(9, 18446744073709551606));
        assert_eq!(umul128(u64::MAX, u64::MAX), Uint128::new(u64::MAX - 1, 1));
        assert_eq!(umul128(1 << 63, 2), Uint128::new(1, 0));
        assert_eq!(umul128(0xffff_ffff, 0xffff_ffff), Uint128::new(0, 0xffff_fffe_0000_0001));
    }

    #[test]
    fn portable_matches_native_on_edges() {
        let edges = [0, 1, 2, 0xffff_ffff, 0x1_0000_0000, 0x8000_0000_0000_0000, u64::MAX - 1, u64::MAX];
        for a in edges {
            for b in edges {
                assert_eq!(umul128_portable(a, b), umul128_native(a, b), "{a} * {b}");
            }
        }
    }

    #[test]
    fn round_to_odd() {
        // g = 2^127 + 1 represents 10^0: the product keeps `cp / 2`.
        assert_eq!(round_to_odd_64(1 << 63, 1, 40), 20);
        assert_eq!(round_to_odd_32(1 << 31, 1, 40), 20);
        // 2.5 truncates to 2, and the lost half sets the sticky bit.
        assert_eq!(round_to_odd_64(1 << 63, 0, 5), 3);
        assert_eq!(round_to_odd_32(1 << 31, 0, 5), 3);
        assert_eq!(round_to_odd_64(0, 0, 40), 0);
        assert_eq!(round_to_odd_32(0, 0, 40), 0);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200_000))]

        #[test]
        fn exact(a: u64, b: u64) {
            let expected = a as u128 * b as u128;
            prop_assert_eq!(u128::from(umul128(a, b)), expected);
            prop_assert_eq!(u128::from(umul128_portable(a, b)), expected);
            prop_assert_eq!(umul128_native(a, b), Uint128::from(expected));
        }

        #[test]
        fn round_to_odd_64_matches_u128(hi: u64, lo: u64, cp: u64) {
            // Full 192-bit product, computed in two u128 halves.
            let low = lo as u128 * cp as u128;
            let high = hi as u128 * cp as u128 + (low >> 64);
            let discarded = (high as u64 as u128) << 64 | (low as u64 as u128);
            let kept = (high >> 64) as u64;
            let expected = kept | ((discarded >> 64) as u64 > 1) as u64;
            prop_assert_eq!(round_to_odd_64(hi, lo, cp), expected);
        }
    }
}
