//! The shortest-representation search, instantiated once per binary width.
//!
//! The search follows Giulietti's Schubfach: the rounding interval of the binary value is scaled
//! by a precomputed power of ten so that at most two decimal lengths need to be inspected, and
//! every comparison is done on integers produced by [round_to_odd](crate::conv::wide).

macro_rules! mk_impl { (
    float = $f:ident,
    mant = $mant:ident,
    mant_signed = $mant_signed:ident,
    bits_mantissa = $bits_mantissa:literal,
    multipliers = $multipliers:path,
    round_to_odd = $round_to_odd:path,
) => {

use crate::conv::common;

/// Significands of `$f` fit in `$mant`, the unsigned integer of the same width.
pub type Mant = $mant;
pub type Exp = common::Exp;

/// `|num| = mant * 2^exp` for a finite `num: $f`.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Binary {
    exp: Exp,
    mant: Mant,
}

/// `|num| ≈ mant * 10^exp`, the candidate found by the search.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Decimal {
    exp: Exp,
    mant: Mant,
}

/// `x mod 2^n`.
#[inline]
pub const fn lsb(x: Mant, n: u32) -> Mant {
    x % (1 << n)
}

/// Even significands own the endpoints of their rounding interval, and win ties.
#[inline]
pub const fn is_even(n: Mant) -> bool {
    n % 2 == 0
}

impl Binary {
    /// Precision of the significand in bits, hidden bit included.
    const BITS_MANTISSA: u32 = $bits_mantissa;

    /// Stored fraction bits.
    const BITS_MANTISSA_EXPLICIT: u32 = Self::BITS_MANTISSA - 1;

    /// Binary exponent of subnormals and of the smallest normal binade, with the significand read
    /// as an integer.
    const MIN_EXP: Exp = $f::MIN_EXP - Self::BITS_MANTISSA as i32;

    /// The hidden bit, i.e. the significand of a power of two.
    const MAX_MANT: Mant = 1 << Self::BITS_MANTISSA_EXPLICIT;

    /// Splits a **finite** `num` so that `|num| = mant * 2^exp`. Garbage in for infinities and
    /// NaNs, garbage out.
    #[inline]
    pub const fn new(num: $f) -> Self {
        debug_assert!(num.is_finite());

        let bits = num.to_bits();
        let mut mant = lsb(bits, Self::BITS_MANTISSA_EXPLICIT);
        let mut exp = lsb(bits >> Self::BITS_MANTISSA_EXPLICIT, Mant::BITS - Self::BITS_MANTISSA) as Exp;

        if exp != 0 {
            exp -= 1;
            mant |= 1 << Self::BITS_MANTISSA_EXPLICIT;
        }

        Binary {
            exp: exp + Self::MIN_EXP,
            mant,
        }
    }

    /// Whether the low `self.exp` bits of `self.mant` are clear. Needs `0 ≤ self.exp < Mant::BITS`.
    #[inline]
    const fn is_multiple_of_pow2(&self) -> bool {
        lsb(self.mant, self.exp as u32) == 0
    }

    /// Whether `self` is an integer below `2^BITS_MANTISSA`, where every integer is exact.
    #[inline]
    const fn is_small_integer(&self) -> bool {
        // no fractional bits may be lost by the shift
        let neg_exp = -self.exp;
        0 <= neg_exp && neg_exp < Self::BITS_MANTISSA as Exp
            && Binary { exp: neg_exp, .. *self }.is_multiple_of_pow2()
    }

    /// The core of the search: finds the shortest decimal in the rounding interval of `self`, or
    /// the closest one if several are equally short.
    #[inline]
    fn schubfach_inner(self) -> Decimal {
        debug_assert!(self.mant != 0);

        let even = is_even(self.mant);
        // The lower neighbour is closer when `self` sits just above a binade boundary.
        let closer = self.mant == Self::MAX_MANT && self.exp != Self::MIN_EXP;

        let cbl = 4 * self.mant - 2 + closer as Mant;
        let cb = 4 * self.mant;
        let cbr = 4 * self.mant + 2;

        let k = if closer {
            common::exp_log10_three_quarters_pow2(self.exp)
        } else {
            common::exp_log10_pow2(self.exp)
        };
        let h = (self.exp + common::exp_log2_pow10(-k) + 1) as u32;
        debug_assert!(1 <= h && h <= 4);

        debug_assert!($multipliers.exps().contains(&-k));
        // SAFETY: `-k` is within the table for every finite `$f`.
        let mult = unsafe { $multipliers.get(-k) };

        let vbl = $round_to_odd(mult.hi, mult.lo, cbl << h);
        let vb = $round_to_odd(mult.hi, mult.lo, cb << h);
        let vbr = $round_to_odd(mult.hi, mult.lo, cbr << h);

        let lower = vbl + !even as Mant;
        let upper = vbr - !even as Mant;

        let s = vb / 4;
        if s >= 10 {
            // One digit fewer: only one of its two neighbours can be in the interval.
            let sp = s / 10;
            let up_in = lower <= 40 * sp;
            let wp_in = 40 * sp + 40 <= upper;
            if up_in != wp_in {
                return Decimal { exp: k + 1, mant: sp + wp_in as Mant }
            }
        }

        let u_in = lower <= 4 * s;
        let w_in = 4 * s + 4 <= upper;
        if u_in != w_in {
            return Decimal { exp: k, mant: s + w_in as Mant }
        }

        // Both are in: pick the closest, ties to even.
        let mid = 4 * s + 2;
        let round_up = vb > mid || (vb == mid && !is_even(s));
        Decimal { exp: k, mant: s + round_up as Mant }
    }

    /// The full search: short-circuits the "small integer" case.
    #[inline]
    pub fn shortest(self) -> Decimal {
        if self.is_small_integer() {
            debug_assert!(self.exp <= 0);
            return Decimal { exp: 0, mant: self.mant >> (-self.exp as u32) }.remove_trailing_zeros()
        }
        self.schubfach_inner().remove_trailing_zeros()
    }
}

impl Decimal {
    /// Moves trailing decimal zeros of the significand into the exponent. Divisibility by ten is
    /// tested with a multiply by the modular inverse of 5 and a rotate.
    const fn remove_trailing_zeros(mut self) -> Self {
        const M_INV5: Mant = -((Mant::MAX / 5) as $mant_signed) as Mant;
        const BOUND: Mant = Mant::MAX / 10 + 1;
        loop {
            let q = self.mant.wrapping_mul(M_INV5).rotate_right(1);
            if q >= BOUND {
                return self
            }
            self.exp += 1;
            self.mant = q;
        }
    }
}

/// Finds the shortest decimal representation of a **finite** `num`.
///
/// Zero (of either sign) gives a zero significand with a zero exponent.
#[inline]
pub fn to_decimal(num: $f) -> common::Decimal {
    debug_assert!(num.is_finite());
    let negative = num.is_sign_negative();
    let binary = Binary::new(num);
    if binary.mant == 0 {
        return common::Decimal { significand: 0, exponent: 0, negative }
    }
    let decimal = binary.shortest();
    common::Decimal { significand: decimal.mant as u64, exponent: decimal.exp, negative }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Reads ryu's output back into a significand without trailing zeros and an exponent.
    fn parse_ryu(s: &str) -> (u64, i32) {
        let s = s.trim_start_matches('-');
        let (mant, exp) = match s.split_once('e') {
            Some((mant, exp)) => (mant, exp.parse::<i32>().unwrap()),
            None => (s, 0),
        };
        let (int, frac) = mant.split_once('.').unwrap_or((mant, ""));
        let frac = frac.trim_end_matches('0');
        let digits = format!("{int}{frac}");
        let mut significand: u64 = digits.parse().unwrap();
        let mut exp = exp - frac.len() as i32;
        while significand != 0 && significand % 10 == 0 {
            significand /= 10;
            exp += 1;
        }
        (significand, exp)
    }

    mod binary {
        use super::*;

        #[test]
        fn extremes() {
            assert_eq!(Binary::new(0.0), Binary { exp: Binary::MIN_EXP, mant: 0 });
            assert_eq!(Binary::new(-0.0), Binary { exp: Binary::MIN_EXP, mant: 0 });
            assert_eq!(Binary::new($f::from_bits(1)), Binary { exp: Binary::MIN_EXP, mant: 1 });
            assert_eq!(
                Binary::new($f::MIN_POSITIVE),
                Binary { exp: Binary::MIN_EXP, mant: Binary::MAX_MANT },
            );
            assert_eq!(
                Binary::new($f::MAX),
                Binary { exp: $f::MAX_EXP - Binary::BITS_MANTISSA as i32, mant: 2 * Binary::MAX_MANT - 1 },
            );
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200_000))]

            #[test]
            fn float_roundtrip(
                float in $f::MIN .. $f::MAX,
            ) {
                prop_assume!(float.abs() != 0.0);
                let binary = Binary::new(float);
                let refloat = (binary.mant as f64 * 2f64.powi(binary.exp)) as $f;
                prop_assert_eq!(refloat, float.abs());
            }
        }
    }

    mod decimal {
        use super::*;

        #[test]
        fn trailing_zeros() {
            let d = Decimal { exp: 0, mant: 1200 }.remove_trailing_zeros();
            assert_eq!(d, Decimal { exp: 2, mant: 12 });
            let d = Decimal { exp: -3, mant: 7 }.remove_trailing_zeros();
            assert_eq!(d, Decimal { exp: -3, mant: 7 });
            let d = Decimal { exp: 0, mant: 10 }.remove_trailing_zeros();
            assert_eq!(d, Decimal { exp: 1, mant: 1 });
        }

        #[test]
        fn signs_and_zero() {
            assert_eq!(to_decimal(0.0), common::Decimal { significand: 0, exponent: 0, negative: false });
            assert_eq!(to_decimal(-0.0), common::Decimal { significand: 0, exponent: 0, negative: true });
            assert_eq!(to_decimal(-1.0), common::Decimal { significand: 1, exponent: 0, negative: true });
            assert_eq!(to_decimal(100.0), common::Decimal { significand: 1, exponent: 2, negative: false });
        }

        #[test]
        fn every_binade() {
            // Powers of two hit the asymmetric interval, their successors the symmetric one.
            let max_exp = (1 << (Mant::BITS - Binary::BITS_MANTISSA)) - 1;
            for e in 0 .. max_exp {
                let base = (e as $mant) << Binary::BITS_MANTISSA_EXPLICIT;
                for bits in [base, base + 1, base + Binary::MAX_MANT - 1] {
                    let float = $f::from_bits(bits);
                    if float == 0.0 {
                        continue
                    }
                    let decimal = to_decimal(float);
                    let expected = parse_ryu(ryu::Buffer::new().format_finite(float));
                    assert_eq!((decimal.significand, decimal.exponent), expected, "{float:e}");
                }
            }
        }

        const INT_BOUND: $mant_signed = (1u64 << Binary::BITS_MANTISSA) as $mant_signed;
        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200_000))]

            #[test]
            fn integer_roundtrip(
                int in -INT_BOUND + 1 .. INT_BOUND,
            ) {
                prop_assume!(int != 0);
                let decimal = to_decimal(int as $f);
                let expected = Decimal { exp: 0, mant: int.unsigned_abs() }.remove_trailing_zeros();
                prop_assert_eq!(decimal.negative, int < 0);
                prop_assert_eq!((decimal.significand, decimal.exponent), (expected.mant as u64, expected.exp));
            }

            #[test]
            fn ryu(
                bits in 1 as $mant .. $f::INFINITY.to_bits(),
            ) {
                let float = $f::from_bits(bits);
                let decimal = to_decimal(float);
                prop_assert_eq!(
                    (decimal.significand, decimal.exponent),
                    parse_ryu(ryu::Buffer::new().format_finite(float)),
                );
            }

            #[test]
            fn float_roundtrip(
                float in $f::MIN .. $f::MAX,
            ) {
                prop_assume!(float.abs() != 0.0);
                let decimal = to_decimal(float);
                let refloat: $f = format!("{}e{}", decimal.significand, decimal.exponent).parse().unwrap();
                prop_assert_eq!(refloat, float.abs());
            }
        }
    }
}

}} // mk_impl

pub(crate) use mk_impl;
