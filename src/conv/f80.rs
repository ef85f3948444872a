//! The x87 80-bit extended precision format, as a plain bit container.
//!
//! Rust has no native type for it, so values arrive as bit patterns: from C via FFI, from binary
//! files, or widened exactly from `f32` and `f64`.

/// An x87 extended precision value: 1 sign bit, 15 exponent bits, and a 64-bit significand whose
/// integer bit is stored explicitly.
///
/// Equality compares bit patterns, not numeric values.
#[derive(Debug)]
#[derive(Clone, Copy, Default)]
#[derive(PartialEq, Eq, Hash)]
pub struct F80 {
    bits: u128,
}

impl F80 {
    const MASK: u128 = (1 << 80) - 1;
    const EXP_MAX: u16 = 0x7fff;
    const INTEGER_BIT: u64 = 1 << 63;

    /// Builds a value from the low 80 bits of `bits`; higher bits are ignored.
    #[inline]
    pub const fn from_bits(bits: u128) -> Self {
        F80 { bits: bits & Self::MASK }
    }

    #[inline]
    pub const fn to_bits(self) -> u128 {
        self.bits
    }

    /// Builds a value from its fields: the sign, the 15-bit biased exponent (higher bits are
    /// ignored), and the full significand including the integer bit.
    #[inline]
    pub const fn from_parts(negative: bool, exponent: u16, significand: u64) -> Self {
        let bits = (negative as u128) << 79
            | ((exponent & Self::EXP_MAX) as u128) << 64
            | significand as u128;
        F80 { bits }
    }

    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        self.bits >> 79 != 0
    }

    #[inline]
    pub const fn exponent(self) -> u16 {
        (self.bits >> 64) as u16 & Self::EXP_MAX
    }

    #[inline]
    pub const fn significand(self) -> u64 {
        self.bits as u64
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        self.exponent() != Self::EXP_MAX
    }
}

impl From<f64> for F80 {
    /// Widens exactly; subnormal `f64`s become normal `F80`s.
    fn from(x: f64) -> F80 {
        let bits = x.to_bits();
        let negative = bits >> 63 != 0;
        let exp = ((bits >> 52) & 0x7ff) as u16;
        let frac = bits & ((1 << 52) - 1);
        let (exponent, significand) = match exp {
            0 if frac == 0 => (0, 0),
            0 => {
                // frac * 2^-1074, normalized so that the integer bit is set
                let shift = frac.leading_zeros();
                (15372 - shift as u16, frac << shift)
            }
            0x7ff if frac == 0 => (F80::EXP_MAX, F80::INTEGER_BIT),
            // quiet, keeping the payload
            0x7ff => (F80::EXP_MAX, F80::INTEGER_BIT | 1 << 62 | frac << 11),
            _ => (exp + (16383 - 1023), F80::INTEGER_BIT | frac << 11),
        };
        F80::from_parts(negative, exponent, significand)
    }
}

impl From<f32> for F80 {
    /// Widens exactly.
    fn from(x: f32) -> F80 {
        F80::from(x as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widening() {
        assert_eq!(F80::from(1.0f64).to_bits(), 0x3fff_8000_0000_0000_0000);
        assert_eq!(F80::from(-2.0f64).to_bits(), 0xc000_8000_0000_0000_0000);
        assert_eq!(F80::from(1.5f32).to_bits(), 0x3fff_c000_0000_0000_0000);
        assert_eq!(F80::from(0.0f64).to_bits(), 0);
        assert_eq!(F80::from(-0.0f64).to_bits(), 1 << 79);
        assert_eq!(F80::from(f64::INFINITY).to_bits(), 0x7fff_8000_0000_0000_0000);
        assert_eq!(F80::from(f64::NEG_INFINITY).to_bits(), 0xffff_8000_0000_0000_0000);
        assert!(!F80::from(f64::NAN).is_finite());
        assert_eq!(F80::from(f64::NAN).significand() >> 62, 0b11);
        // 2^-1074
        assert_eq!(F80::from(f64::from_bits(1)), F80::from_parts(false, 16383 - 1074, 1 << 63));
        // 2^-1022 - 2^-1074
        let largest_subnormal = F80::from(f64::from_bits((1 << 52) - 1));
        assert_eq!(largest_subnormal, F80::from_parts(false, 16383 - 1023, u64::MAX << 12));
    }

    #[test]
    fn fields() {
        let x = F80::from_parts(true, 0xffff, 42);
        assert!(x.is_sign_negative());
        assert_eq!(x.exponent(), 0x7fff);
        assert_eq!(x.significand(), 42);
        assert_eq!(F80::from_bits(u128::MAX).to_bits(), (1 << 80) - 1);
    }
}
