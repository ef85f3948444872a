//! Exactly rounded digit generation for a caller-chosen number of digits.
//!
//! This is the fixed-length half of Steele & White's Dragon4: the value is held as an exact
//! ratio of two big integers and digits are peeled off one at a time, so any precision can be
//! produced with correct half-to-even rounding. The powers of ten needed for the scaling come from
//! a two-tier cache: [POW10](lut::POW10) for every exponent that fits in a limb, and a handful of
//! exact powers of five that compose every larger exponent.

use core::cmp::Ordering;

use crate::conv::bignum::Big;
use crate::conv::lut;

/// Limbs needed for `f32` and `f64`: `2^1074 * 10^17` fits comfortably in 1280 bits.
pub const LIMBS_F64: usize = 20;

/// Limbs needed for x87 extended precision: `2^16445 * 10^22` fits in 16640 bits.
pub const LIMBS_F80: usize = 260;

/// Approximates `k_0 = ceil(log_10(mant * 2^exp))`; the result is either exact or one too small.
#[inline]
pub fn estimate_scaling_factor(mant: u64, exp: i32) -> i32 {
    debug_assert!(mant > 0);
    // 2^(nbits-1) < mant <= 2^nbits if mant > 0
    let nbits = 64 - (mant - 1).leading_zeros() as i64;
    (((nbits + exp as i64) * 1292913986) >> 32) as i32
}

/// Multiplies `x` by `10^n`.
pub fn mul_pow10<const N: usize>(x: &mut Big<N>, n: usize) -> &mut Big<N> {
    if n < lut::POW10.len() {
        return x.mul_small(lut::POW10[n])
    }
    // 10^n = 5^n * 2^n, with 5^n assembled from its binary expansion
    let mut rest = n;
    while rest >= 256 {
        x.mul_digits(&lut::POW5_256);
        rest -= 256;
    }
    if rest & 128 != 0 {
        x.mul_digits(&lut::POW5_128);
    }
    if rest & 64 != 0 {
        x.mul_digits(&lut::POW5_64);
    }
    if rest & 32 != 0 {
        x.mul_digits(&lut::POW5_32);
    }
    if rest & 16 != 0 {
        x.mul_small(lut::POW10[16] >> 16);
    }
    let small = rest & 15;
    if small != 0 {
        x.mul_small(lut::POW10[small] >> small);
    }
    x.mul_pow2(n)
}

/// Divides `x` by `2 * 10^n`, rounding down.
pub fn div_2pow10<const N: usize>(x: &mut Big<N>, mut n: usize) -> &mut Big<N> {
    // 2 * 10^18 is the largest such divisor that fits in a limb
    const LARGEST: usize = 18;
    while n > LARGEST {
        x.div_rem_small(lut::POW10[LARGEST]);
        if x.is_zero() {
            return x
        }
        n -= LARGEST;
    }
    x.div_rem_small(2 * lut::POW10[n]);
    x
}

/// Rounds up the decimal digits in `d`, as if a `1` was added after the last one.
///
/// Returns `None` if the length is unchanged. Otherwise `d` now reads `10...0`, one digit short;
/// the digit to append is returned (`1` if `d` is empty, `0` otherwise).
pub fn round_up(d: &mut [u8]) -> Option<u8> {
    match d.iter().rposition(|&c| c != b'9') {
        Some(i) => {
            d[i] += 1;
            d[i + 1..].fill(b'0');
            None
        }
        None if !d.is_empty() => {
            d[0] = b'1';
            d[1..].fill(b'0');
            Some(b'0')
        }
        None => Some(b'1'),
    }
}

/// Writes the decimal digits of `mant * 2^exp` into `buf`, correctly rounded half to even.
///
/// Returns `(len, k)`: the digits `buf[..len]` read as `0.d1d2..dlen * 10^k`. Generation stops at
/// whichever comes first of `buf.len()` digits or the digit worth `10^limit`; with
/// `limit = i32::MIN` exactly `buf.len()` significant digits are written. An empty result means
/// the value rounds to zero at `limit`.
///
/// `N` is the number of limbs of the scratch integers, see [LIMBS_F64] and [LIMBS_F80].
pub fn format_exact<const N: usize>(mant: u64, exp: i32, buf: &mut [u8], limit: i32) -> (usize, i32) {
    debug_assert!(mant > 0);

    // estimate `k_0` from original inputs satisfying `10^(k_0-1) < v <= 10^(k_0+1)`.
    let mut k = estimate_scaling_factor(mant, exp);

    // `v = mant / scale`.
    let mut mant = Big::<N>::from_u64(mant);
    let mut scale = Big::<N>::from_u64(1);
    if exp < 0 {
        scale.mul_pow2(exp.unsigned_abs() as usize);
    } else {
        mant.mul_pow2(exp as usize);
    }

    // divide `mant` by `10^k`. now `scale / 10 < mant <= scale * 10`.
    if k >= 0 {
        mul_pow10(&mut scale, k as usize);
    } else {
        mul_pow10(&mut mant, k.unsigned_abs() as usize);
    }

    // fixup when `mant + plus >= scale`, where `plus / scale = 10^-buf.len() / 2`. the first digit
    // may then be zero, and is eventually rounded up.
    let mut rounding = scale.clone();
    div_2pow10(&mut rounding, buf.len());
    if *rounding.add(&mant) >= scale {
        // equivalent to scaling `scale` by 10
        k += 1;
    } else {
        mant.mul_small(10);
    }

    let len = if (k as i64) < limit as i64 {
        0
    } else {
        (k as i64 - limit as i64).min(buf.len() as i64) as usize
    };

    // cache `(2, 4, 8) * scale` for digit generation.
    let mut scale2 = scale.clone();
    scale2.mul_pow2(1);
    let mut scale4 = scale.clone();
    scale4.mul_pow2(2);
    let mut scale8 = scale.clone();
    scale8.mul_pow2(3);

    for i in 0 .. len {
        if mant.is_zero() {
            // following digits are all zeroes, and there is nothing left to round.
            buf[i .. len].fill(b'0');
            return (len, k)
        }

        let mut d = 0;
        if mant >= scale8 { mant.sub(&scale8); d += 8; }
        if mant >= scale4 { mant.sub(&scale4); d += 4; }
        if mant >= scale2 { mant.sub(&scale2); d += 2; }
        if mant >= scale { mant.sub(&scale); d += 1; }
        debug_assert!(mant < scale);
        debug_assert!(d < 10);
        buf[i] = b'0' + d;
        mant.mul_small(10);
    }

    // round half to even at the cut: the rest is `mant / (10 * scale)`.
    let mut len = len;
    let mut half = scale;
    half.mul_small(5);
    let order = mant.cmp(&half);
    if order == Ordering::Greater || (order == Ordering::Equal && len > 0 && buf[len - 1] % 2 == 1) {
        if let Some(c) = round_up(&mut buf[..len]) {
            // the carry moved the leading digit; it also fits one more digit before `limit`.
            k += 1;
            if k > limit && len < buf.len() {
                buf[len] = c;
                len += 1;
            }
        }
    }

    (len, k)
}
