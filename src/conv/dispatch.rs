//! The entry point: picks a digit generator and a layout for each request.
//!
//! With an unspecified precision, `f32` and `f64` print their shortest round-trip decimal and the
//! extended format prints its round-trip number of significant digits with trailing zeros
//! removed. With an explicit precision every format prints exactly rounded digits.

use crate::Error;
use crate::conv::common::{Class, FloatBits};
use crate::conv::fmt::Cursor;
use crate::conv::format::{self, Format};
use crate::conv::{Float, hex};

/// Writes `value` into `buf` in the given `format`, returning the number of bytes written.
///
/// A negative `precision` means "unspecified". Otherwise it is the number of fractional digits
/// for [Format::Fixed] and [Format::Hex], and the number of significant digits for
/// [Format::Scientific] and [Format::General] (where `0` counts as `1`).
///
/// Infinities are written as `inf` and NaNs as `nan`, with a `-` if their sign bit is set.
///
/// # Errors
///
/// Returns [Error::ValueTooLarge] if the text does not fit in `buf`, or if the precision alone
/// exceeds `buf.len()`. Nothing is ever written past the end of `buf`, but its contents are
/// unspecified after an error.
pub fn to_chars<F: Float>(buf: &mut [u8], value: F, format: Format, precision: i32) -> Result<usize, Error> {
    let precision = usize::try_from(precision).ok();
    if precision.is_some_and(|p| p > buf.len()) {
        return Err(Error::ValueTooLarge)
    }

    let layout = F::LAYOUT;
    let bits = layout.unpack(value.to_bits128());
    let mut out = Cursor::new(buf);
    match bits.class(&layout) {
        Class::Nan => {
            out.sign(bits.negative)?;
            out.write(b"nan")?;
        }
        Class::Infinite => {
            out.sign(bits.negative)?;
            out.write(b"inf")?;
        }
        _ if format == Format::Hex => hex::format(&mut out, bits, &layout, precision)?,
        class => match precision {
            None => unspecified(&mut out, value, bits, class, format)?,
            Some(p) => exact::<F>(&mut out, bits, class, format, p)?,
        },
    }
    Ok(out.position())
}

/// Round-trip output, for an unspecified precision.
fn unspecified<F: Float>(out: &mut Cursor, value: F, bits: FloatBits, class: Class, format: Format) -> Result<(), Error> {
    let layout = F::LAYOUT;
    out.sign(bits.negative)?;

    if matches!(format, Format::General | Format::Fixed) {
        // Integers that fit in the significand print as themselves in either notation.
        if let Some(int) = bits.small_integer(&layout) {
            out.integer(int)?;
            return Ok(())
        }
    }

    let start = out.position();
    let (n, k) = if class == Class::Zero {
        out.push(b'0')?;
        (1, 1)
    } else if let Some(decimal) = value.shortest() {
        let n = out.integer(decimal.significand)?;
        (n, decimal.exponent + n as i32)
    } else {
        let (mant, exp) = bits.significand(&layout);
        let mut digits = [0u8; 32];
        let digits = &mut digits[.. layout.max_digits10 as usize];
        let (mut n, k) = F::format_exact(mant, exp, digits, i32::MIN);
        while n > 1 && digits[n - 1] == b'0' {
            n -= 1;
        }
        out.write(&digits[.. n])?;
        (n, k)
    };

    let scientific = match format {
        Format::Scientific => true,
        Format::General => !F::GENERAL_FIXED_EXPS.contains(&(k - 1)),
        _ => false,
    };
    if scientific {
        format::scientific(out, start, n, k)
    } else {
        format::fixed(out, start, n, k)
    }
}

/// Exactly rounded output, for an explicit precision `p`.
fn exact<F: Float>(out: &mut Cursor, bits: FloatBits, class: Class, format: Format, p: usize) -> Result<(), Error> {
    let layout = F::LAYOUT;
    let (mant, exp) = bits.significand(&layout);
    out.sign(bits.negative)?;
    let start = out.position();

    if format == Format::Fixed {
        let (n, k) = if class == Class::Zero {
            (0, 0)
        } else {
            F::format_exact(mant, exp, out.remaining(), -(p as i32))
        };
        if n == 0 {
            // rounds to zero
            out.push(b'0')?;
            if p > 0 {
                out.push(b'.')?;
                out.fill(b'0', p)?;
            }
            return Ok(())
        }
        // fewer digits than asked for means the buffer ran out
        if n as i64 != k as i64 + p as i64 {
            return Err(Error::ValueTooLarge)
        }
        out.advance(n)?;
        return format::fixed(out, start, n, k)
    }

    let digits = p.max(1);
    let window = out.remaining().get_mut(.. digits).ok_or(Error::ValueTooLarge)?;
    let k = if class == Class::Zero {
        window.fill(b'0');
        1
    } else {
        let (n, k) = F::format_exact(mant, exp, window, i32::MIN);
        debug_assert_eq!(n, digits);
        k
    };
    out.advance(digits)?;

    if format == Format::General {
        let n = format::trim_zeros(out, start, digits);
        if format::general_is_scientific(k, digits) {
            format::scientific(out, start, n, k)
        } else {
            format::fixed(out, start, n, k)
        }
    } else {
        format::scientific(out, start, digits, k)
    }
}
