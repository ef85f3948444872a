pub mod common;
pub mod wide;

mod bignum;
mod dispatch;
mod exact;
mod f80;
mod fmt;
mod format;
mod hex;
mod lut;
mod mk_impl;

pub use dispatch::to_chars;
pub use f80::F80;
pub use format::Format;

use common::{Decimal, Layout};

mod f32_impl {
    crate::conv::mk_impl::mk_impl! {
        float = f32,
        mant = u32,
        mant_signed = i32,
        bits_mantissa = 24,
        multipliers = crate::conv::lut::MULTIPLIERS_32,
        round_to_odd = crate::conv::wide::round_to_odd_32,
    }
}

mod f64_impl {
    crate::conv::mk_impl::mk_impl! {
        float = f64,
        mant = u64,
        mant_signed = i64,
        bits_mantissa = 53,
        multipliers = crate::conv::lut::MULTIPLIERS_64,
        round_to_odd = crate::conv::wide::round_to_odd_64,
    }
}

/// A floating point type which [charconv](crate) can write as text.
///
/// This trait is "sealed", meaning it cannot be implemented for any other types.
pub trait Float: Sealed {
    /// Length of the longest text [to_chars](crate::to_chars) writes for this type with an
    /// unspecified precision, in [Format::General], [Format::Scientific] or [Format::Hex].
    const MAX_CHARS: usize;
}

/// A floating point type with a shortest round-trip representation, see
/// [to_decimal](crate::to_decimal).
///
/// This trait is "sealed", meaning it cannot be implemented for any other types.
pub trait Shortest: Float + SealedShortest {}

impl Float for f32 {
    const MAX_CHARS: usize = 16;
}

impl Float for f64 {
    const MAX_CHARS: usize = 24;
}

impl Float for F80 {
    const MAX_CHARS: usize = 29;
}

impl Shortest for f32 {}
impl Shortest for f64 {}

pub trait Sealed: Copy {
    const LAYOUT: Layout;

    /// Scientific exponents that [Format::General] writes in fixed notation when the precision is
    /// unspecified.
    const GENERAL_FIXED_EXPS: core::ops::RangeInclusive<i32>;

    fn to_bits128(self) -> u128;

    /// The shortest round-trip decimal of a **finite** value, if this type has a shortest search.
    fn shortest(self) -> Option<Decimal>;

    /// Exact digit generation, with scratch integers wide enough for this type. See
    /// [exact::format_exact].
    fn format_exact(mant: u64, exp: i32, buf: &mut [u8], limit: i32) -> (usize, i32);
}

pub trait SealedShortest: Sealed {
    /// The shortest round-trip decimal of a **finite** value.
    fn decimal(self) -> Decimal;
}

impl SealedShortest for f32 {
    #[inline]
    fn decimal(self) -> Decimal {
        f32_impl::to_decimal(self)
    }
}

impl SealedShortest for f64 {
    #[inline]
    fn decimal(self) -> Decimal {
        f64_impl::to_decimal(self)
    }
}

impl Sealed for f32 {
    const LAYOUT: Layout = Layout::F32;
    const GENERAL_FIXED_EXPS: core::ops::RangeInclusive<i32> = -4 ..= 9;

    #[inline]
    fn to_bits128(self) -> u128 {
        self.to_bits() as u128
    }

    #[inline]
    fn shortest(self) -> Option<Decimal> {
        Some(self.decimal())
    }

    fn format_exact(mant: u64, exp: i32, buf: &mut [u8], limit: i32) -> (usize, i32) {
        exact::format_exact::<{ exact::LIMBS_F64 }>(mant, exp, buf, limit)
    }
}

impl Sealed for f64 {
    const LAYOUT: Layout = Layout::F64;
    const GENERAL_FIXED_EXPS: core::ops::RangeInclusive<i32> = -4 ..= 17;

    #[inline]
    fn to_bits128(self) -> u128 {
        self.to_bits() as u128
    }

    #[inline]
    fn shortest(self) -> Option<Decimal> {
        Some(self.decimal())
    }

    fn format_exact(mant: u64, exp: i32, buf: &mut [u8], limit: i32) -> (usize, i32) {
        exact::format_exact::<{ exact::LIMBS_F64 }>(mant, exp, buf, limit)
    }
}

impl Sealed for F80 {
    const LAYOUT: Layout = Layout::F80;
    const GENERAL_FIXED_EXPS: core::ops::RangeInclusive<i32> = -4 ..= 20;

    #[inline]
    fn to_bits128(self) -> u128 {
        self.to_bits()
    }

    #[inline]
    fn shortest(self) -> Option<Decimal> {
        None
    }

    fn format_exact(mant: u64, exp: i32, buf: &mut [u8], limit: i32) -> (usize, i32) {
        exact::format_exact::<{ exact::LIMBS_F80 }>(mant, exp, buf, limit)
    }
}
