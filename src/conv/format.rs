//! Decimal layouts.
//!
//! Both digit generators leave their digits in place in the output buffer; the routines here
//! rearrange them into fixed or scientific notation without a second formatting pass. Digits are
//! described as `0.d1d2..dn * 10^k`, so the value's decimal exponent in scientific notation is
//! `k - 1`.

use crate::Error;
use crate::conv::fmt::Cursor;

/// The notation requested from [to_chars](crate::to_chars).
#[derive(Debug)]
#[derive(Clone, Copy, Default)]
#[derive(PartialEq, Eq, Hash)]
pub enum Format {
    /// Fixed notation for moderate magnitudes, scientific notation otherwise.
    ///
    /// With an explicit precision `p`, this follows `printf`'s `%g`: `p` significant digits,
    /// scientific notation if the exponent is below -4 or at least `p`, and trailing zeros removed.
    #[default]
    General,
    /// Fixed notation, e.g. `1234.5`; an explicit precision is the number of fractional digits.
    Fixed,
    /// Scientific notation, e.g. `1.2345e+03`; an explicit precision is the number of significant
    /// digits.
    Scientific,
    /// Hexadecimal significand and binary exponent, e.g. `0x1.34a4p+10`; an explicit precision is
    /// the number of hexadecimal fraction digits.
    Hex,
}

/// Lays out the `n` digits at `start`, worth `0.d1..dn * 10^k`, in fixed notation and moves the
/// cursor to the end of the result.
///
/// Integers get no decimal point; values below one get a leading `0.` and as many zeros as needed.
pub fn fixed(out: &mut Cursor, start: usize, n: usize, k: i32) -> Result<(), Error> {
    debug_assert!(n > 0);
    let buf = out.buffer();
    let end = if k <= 0 {
        // 1234e-6 -> 0.001234
        let shift = 2 + k.unsigned_abs() as usize;
        let end = start + shift + n;
        if end > buf.len() {
            return Err(Error::ValueTooLarge)
        }
        buf.copy_within(start .. start + n, start + shift);
        buf[start .. start + shift].fill(b'0');
        buf[start + 1] = b'.';
        end
    } else if (k as usize) < n {
        // 1234e-1 -> 123.4
        let point = start + k as usize;
        let end = start + n + 1;
        if end > buf.len() {
            return Err(Error::ValueTooLarge)
        }
        buf.copy_within(point .. start + n, point + 1);
        buf[point] = b'.';
        end
    } else {
        // 1234e2 -> 123400
        let end = start + k as usize;
        if end > buf.len() {
            return Err(Error::ValueTooLarge)
        }
        buf[start + n .. end].fill(b'0');
        end
    };
    out.seek(end)
}

/// Lays out the `n` digits at `start`, worth `0.d1..dn * 10^k`, in scientific notation and moves
/// the cursor to the end of the result.
pub fn scientific(out: &mut Cursor, start: usize, n: usize, k: i32) -> Result<(), Error> {
    debug_assert!(n > 0);
    if n > 1 {
        // 1234 -> 1.234
        let buf = out.buffer();
        if start + n + 1 > buf.len() {
            return Err(Error::ValueTooLarge)
        }
        buf.copy_within(start + 1 .. start + n, start + 2);
        buf[start + 1] = b'.';
        out.seek(start + n + 1)?;
    } else {
        out.seek(start + 1)?;
    }
    out.exponent(k - 1)
}

/// Drops trailing zeros from the `n` digits at `start`, keeping at least one.
pub fn trim_zeros(out: &mut Cursor, start: usize, mut n: usize) -> usize {
    let buf = out.buffer();
    while n > 1 && buf[start + n - 1] == b'0' {
        n -= 1;
    }
    n
}

/// `printf`'s `%g` choice for `precision` significant digits: whether a value whose scientific
/// exponent is `k - 1` is written in scientific notation.
#[inline]
pub fn general_is_scientific(k: i32, precision: usize) -> bool {
    let exp = k as i64 - 1;
    exp < -4 || exp >= precision as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Writes `digits` after `prefix`, lays them out with `layout`, and returns the text.
    fn lay_out(
        prefix: &str,
        digits: &str,
        k: i32,
        layout: fn(&mut Cursor, usize, usize, i32) -> Result<(), Error>,
    ) -> Result<String, Error> {
        let mut buf = [b'#'; 64];
        let mut out = Cursor::new(&mut buf);
        out.write(prefix.as_bytes())?;
        let start = out.position();
        out.write(digits.as_bytes())?;
        layout(&mut out, start, digits.len(), k)?;
        let len = out.position();
        Ok(String::from_utf8(buf[..len].to_vec()).unwrap())
    }

    #[test]
    fn fixed_layouts() {
        assert_eq!(lay_out("", "1234", -2, fixed).unwrap(), "0.001234");
        assert_eq!(lay_out("-", "1234", 0, fixed).unwrap(), "-0.1234");
        assert_eq!(lay_out("", "1234", 1, fixed).unwrap(), "1.234");
        assert_eq!(lay_out("", "1234", 3, fixed).unwrap(), "123.4");
        assert_eq!(lay_out("", "1234", 4, fixed).unwrap(), "1234");
        assert_eq!(lay_out("-", "1234", 6, fixed).unwrap(), "-123400");
        assert_eq!(lay_out("", "5", 1, fixed).unwrap(), "5");
        assert_eq!(lay_out("", "5", 0, fixed).unwrap(), "0.5");
    }

    #[test]
    fn scientific_layouts() {
        assert_eq!(lay_out("", "1234", 4, scientific).unwrap(), "1.234e+03");
        assert_eq!(lay_out("-", "1234", -2, scientific).unwrap(), "-1.234e-03");
        assert_eq!(lay_out("", "5", 1, scientific).unwrap(), "5e+00");
        assert_eq!(lay_out("", "5", 0, scientific).unwrap(), "5e-01");
        assert_eq!(lay_out("", "17976931348623157", 309, scientific).unwrap(), "1.7976931348623157e+308");
    }

    #[test]
    fn overflowing_layouts() {
        let mut buf = [b'#'; 8];
        let mut out = Cursor::new(&mut buf[..6]);
        out.write(b"1234").unwrap();
        assert_eq!(fixed(&mut out, 0, 4, -2), Err(Error::ValueTooLarge));
        assert_eq!(fixed(&mut out, 0, 4, 7), Err(Error::ValueTooLarge));
        assert_eq!(scientific(&mut out, 0, 4, 4), Err(Error::ValueTooLarge));
        assert_eq!(&buf[6..], b"##");
    }

    #[test]
    fn trimming() {
        let mut buf = *b"120000";
        let mut out = Cursor::new(&mut buf);
        assert_eq!(trim_zeros(&mut out, 0, 6), 2);
        assert_eq!(trim_zeros(&mut out, 2, 4), 1);
    }

    #[test]
    fn general_choice() {
        assert!(!general_is_scientific(-3, 6)); // 1e-4
        assert!(general_is_scientific(-4, 6)); // 1e-5
        assert!(!general_is_scientific(6, 6)); // 1e5
        assert!(general_is_scientific(7, 6)); // 1e6
    }
}
