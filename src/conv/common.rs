//! Routines and types that are *shared* between all implementations.

/// The exponent is represented by an i32 regardless of underlying type; this is sufficiently wide
/// to accomodate the exponent of any floating point format.
pub type Exp = i32;

//

pub const EXP_LOG10_POW2_BOUNDS: core::ops::RangeInclusive<i32> = -112815 ..= 112815;

/// Returns the largest exponent `f` such that `10^f ≤ 2^e`, i.e. the integer part of
/// `log_10(2^e)`.
///
/// Uses an euclidean approximation that is only valid in the range [EXP_LOG10_POW2_BOUNDS]. If
/// `exp` is not in that range, the result is unspecified.
#[inline]
pub const fn exp_log10_pow2(exp: i32) -> i32 {
    debug_assert!(*EXP_LOG10_POW2_BOUNDS.start() <= exp && exp <= *EXP_LOG10_POW2_BOUNDS.end());
    let x = 1292913987i64 * exp as i64;
    (x >> 32) as i32
}

pub const EXP_LOG10_THREE_QUARTERS_POW2_BOUNDS: core::ops::RangeInclusive<i32> = -1200 ..= 1200;

/// Returns the integer part of `log_10(3/4 * 2^e)`.
///
/// Only valid in the range [EXP_LOG10_THREE_QUARTERS_POW2_BOUNDS].
#[inline]
pub const fn exp_log10_three_quarters_pow2(exp: i32) -> i32 {
    debug_assert!(
        *EXP_LOG10_THREE_QUARTERS_POW2_BOUNDS.start() <= exp
            && exp <= *EXP_LOG10_THREE_QUARTERS_POW2_BOUNDS.end()
    );
    (exp * 1262611 - 524031) >> 22
}

pub const EXP_LOG2_POW10_BOUNDS: core::ops::RangeInclusive<i32> = -1233 ..= 1233;

/// Returns the integer part of `log_2(10^e)`.
///
/// Only valid in the range [EXP_LOG2_POW10_BOUNDS].
#[inline]
pub const fn exp_log2_pow10(exp: i32) -> i32 {
    debug_assert!(*EXP_LOG2_POW10_BOUNDS.start() <= exp && exp <= *EXP_LOG2_POW10_BOUNDS.end());
    (exp * 1741647) >> 19
}

//

/// A table of [Multiplier]s indexed by decimal exponent, starting at `min_exp`.
pub struct Multipliers<T, const N: usize> {
    min_exp: i32,
    table: [Multiplier<T>; N],
}

/// A power of ten, approximated from above by a fixed-point number of twice the width of `T`.
pub struct Multiplier<T> {
    pub hi: T,
    pub lo: T,
}

impl<T, const N: usize> Multipliers<T, N> {
    pub const fn new(min_exp: i32, table: [Multiplier<T>; N]) -> Self {
        Self { min_exp, table }
    }

    /// The range of exponents covered by this table.
    pub const fn exps(&self) -> core::ops::RangeInclusive<i32> {
        self.min_exp ..= self.min_exp + N as i32 - 1
    }

    /// # Safety
    ///
    /// `exp` must be in [Self::exps].
    #[inline]
    pub unsafe fn get(&self, exp: i32) -> &Multiplier<T> {
        let idx = exp - self.min_exp;
        debug_assert!(0 <= idx && idx < N as i32);
        unsafe { self.table.get_unchecked(idx as usize) }
    }
}

//

/// Capabilities of a binary floating point format: everything the generators need to know to
/// decompose and print a value of that format.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Layout {
    /// Number of stored fraction bits, excluding any integer bit.
    pub fraction_bits: u32,
    /// Number of bits of the biased exponent field.
    pub exponent_bits: u32,
    /// Exponent bias.
    pub bias: i32,
    /// Number of significant decimal digits needed to round-trip any value.
    pub max_digits10: u32,
    /// Whether the integer bit of the significand is stored (x87 extended precision) rather than
    /// implied by the exponent.
    pub explicit_integer_bit: bool,
}

impl Layout {
    pub const F32: Layout = Layout {
        fraction_bits: 23,
        exponent_bits: 8,
        bias: 127,
        max_digits10: 9,
        explicit_integer_bit: false,
    };

    pub const F64: Layout = Layout {
        fraction_bits: 52,
        exponent_bits: 11,
        bias: 1023,
        max_digits10: 17,
        explicit_integer_bit: false,
    };

    pub const F80: Layout = Layout {
        fraction_bits: 63,
        exponent_bits: 15,
        bias: 16383,
        max_digits10: 21,
        explicit_integer_bit: true,
    };

    /// Number of bits below the exponent field.
    #[inline]
    pub const fn mantissa_bits(&self) -> u32 {
        self.fraction_bits + self.explicit_integer_bit as u32
    }

    /// The all-ones biased exponent that marks infinities and NaNs.
    #[inline]
    pub const fn max_exponent(&self) -> u32 {
        (1 << self.exponent_bits) - 1
    }

    /// Splits the bit pattern of a value of this format into its fields.
    #[inline]
    pub const fn unpack(&self, bits: u128) -> FloatBits {
        let mantissa_bits = self.mantissa_bits();
        FloatBits {
            negative: (bits >> (mantissa_bits + self.exponent_bits)) & 1 != 0,
            exponent: ((bits >> mantissa_bits) as u32) & self.max_exponent(),
            mantissa: (bits & ((1 << mantissa_bits) - 1)) as u64,
        }
    }
}

/// The fields of a binary floating point value. Derived from the bit pattern on every call,
/// never stored.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct FloatBits {
    pub negative: bool,
    /// Biased exponent field.
    pub exponent: u32,
    /// Every bit below the exponent field, including the integer bit if the format stores it.
    pub mantissa: u64,
}

#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub enum Class {
    Zero,
    Finite,
    Infinite,
    Nan,
}

impl FloatBits {
    /// The stored fraction bits, without the integer bit.
    #[inline]
    pub const fn fraction(&self, layout: &Layout) -> u64 {
        self.mantissa & ((1 << layout.fraction_bits) - 1)
    }

    /// The digit before the binary point: explicit for x87 formats, implied otherwise.
    #[inline]
    pub const fn integer_bit(&self, layout: &Layout) -> u64 {
        if layout.explicit_integer_bit {
            self.mantissa >> layout.fraction_bits
        } else {
            (self.exponent != 0) as u64
        }
    }

    #[inline]
    pub const fn class(&self, layout: &Layout) -> Class {
        if self.exponent == layout.max_exponent() {
            if self.fraction(layout) == 0 { Class::Infinite } else { Class::Nan }
        } else if self.integer_bit(layout) == 0 && self.fraction(layout) == 0 {
            Class::Zero
        } else {
            Class::Finite
        }
    }

    /// The unbiased exponent of the leading binary digit; subnormals share the smallest one.
    #[inline]
    pub const fn unbiased_exponent(&self, layout: &Layout) -> Exp {
        let exponent = if self.exponent == 0 { 1 } else { self.exponent as Exp };
        exponent - layout.bias
    }

    /// Decomposes the **absolute value** of a finite value into `(mant, exp)` such that
    /// `|value| = mant * 2^exp`.
    #[inline]
    pub const fn significand(&self, layout: &Layout) -> (u64, Exp) {
        let mant = self.integer_bit(layout) << layout.fraction_bits | self.fraction(layout);
        (mant, self.unbiased_exponent(layout) - layout.fraction_bits as Exp)
    }

    /// If the value is an integer below `2^64` that needs no more bits than the significand holds,
    /// returns its absolute value.
    #[inline]
    pub const fn small_integer(&self, layout: &Layout) -> Option<u64> {
        let (mant, exp) = self.significand(layout);
        if mant == 0 {
            return Some(0)
        }
        let neg_exp = -exp;
        if 0 <= neg_exp && neg_exp < u64::BITS as Exp && mant.trailing_zeros() as Exp >= neg_exp {
            Some(mant >> neg_exp as u32)
        } else {
            None
        }
    }
}

//

/// A decimal representation `significand * 10^exponent` of a finite float, as found by
/// [to_decimal](crate::to_decimal).
///
/// For nonzero values the significand has no trailing zeros; zero is represented with
/// `significand = 0` and `exponent = 0`.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub struct Decimal {
    pub significand: u64,
    pub exponent: i32,
    pub negative: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_approximations() {
        for e in EXP_LOG10_THREE_QUARTERS_POW2_BOUNDS {
            // The float estimate is only trusted away from integers.
            let approx = e as f64 * 2f64.log10() + 0.75f64.log10();
            if (approx - approx.round()).abs() > 1e-9 {
                assert_eq!(exp_log10_three_quarters_pow2(e), approx.floor() as i32, "{e}");
            }
        }
        for e in EXP_LOG2_POW10_BOUNDS {
            let approx = e as f64 * 10f64.log2();
            if (approx - approx.round()).abs() > 1e-9 {
                assert_eq!(exp_log2_pow10(e), approx.floor() as i32, "{e}");
            }
        }
        for e in -1100 ..= 1100 {
            let approx = e as f64 * 2f64.log10();
            if (approx - approx.round()).abs() > 1e-9 {
                assert_eq!(exp_log10_pow2(e), approx.floor() as i32, "{e}");
            }
        }
        assert_eq!(exp_log2_pow10(0), 0);
        assert_eq!(exp_log10_pow2(0), 0);
    }

    #[test]
    fn unpack() {
        let one = Layout::F64.unpack(1f64.to_bits() as u128);
        assert_eq!(one, FloatBits { negative: false, exponent: 1023, mantissa: 0 });
        assert_eq!(one.significand(&Layout::F64), (1 << 52, -52));
        assert_eq!(one.class(&Layout::F64), Class::Finite);

        let min = Layout::F32.unpack((-f32::from_bits(1)).to_bits() as u128);
        assert_eq!(min, FloatBits { negative: true, exponent: 0, mantissa: 1 });
        assert_eq!(min.significand(&Layout::F32), (1, -149));

        // x87 one: integer bit set, biased exponent 16383.
        let one = Layout::F80.unpack(0x3fff_8000_0000_0000_0000);
        assert_eq!(one, FloatBits { negative: false, exponent: 16383, mantissa: 1 << 63 });
        assert_eq!(one.significand(&Layout::F80), (1 << 63, -63));
        assert_eq!(one.integer_bit(&Layout::F80), 1);
    }

    #[test]
    fn classes() {
        let class = |x: f64| Layout::F64.unpack(x.to_bits() as u128).class(&Layout::F64);
        assert_eq!(class(0.0), Class::Zero);
        assert_eq!(class(-0.0), Class::Zero);
        assert_eq!(class(f64::MIN_POSITIVE / 2.0), Class::Finite);
        assert_eq!(class(f64::INFINITY), Class::Infinite);
        assert_eq!(class(f64::NEG_INFINITY), Class::Infinite);
        assert_eq!(class(f64::NAN), Class::Nan);
    }

    #[test]
    fn small_integers() {
        let int = |x: f64| Layout::F64.unpack(x.to_bits() as u128).small_integer(&Layout::F64);
        assert_eq!(int(0.0), Some(0));
        assert_eq!(int(1.0), Some(1));
        assert_eq!(int(-1234.0), Some(1234));
        assert_eq!(int(9007199254740991.0), Some(9007199254740991));
        assert_eq!(int(9007199254740992.0), None);
        assert_eq!(int(0.5), None);
        assert_eq!(int(1.5), None);
        assert_eq!(int(1e300), None);
    }
}
