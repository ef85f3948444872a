//! Hexadecimal floating point text, straight from the bit pattern.
//!
//! The output has the shape `[-]0xh.hhhp±d`: the leading digit is the integer bit of the
//! significand (`1` for normal values, `0` for subnormals and zero), the fraction bits follow as
//! lowercase nibbles, and the exponent is a power of two written in decimal. Nothing is lost
//! unless a precision shorter than the fraction asks for rounding.

use crate::Error;
use crate::conv::common::{FloatBits, Layout};
use crate::conv::fmt::Cursor;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Writes the finite value `bits` of format `layout` in hexadecimal.
///
/// With `precision = None` every nonzero nibble of the fraction is written and trailing zero
/// nibbles are dropped, along with the point if none remain. Otherwise exactly `precision` nibbles
/// follow the point, rounded half to even or padded with zeros.
pub fn format(out: &mut Cursor, bits: FloatBits, layout: &Layout, precision: Option<usize>) -> Result<(), Error> {
    out.sign(bits.negative)?;
    out.write(b"0x")?;

    // Align the fraction to a whole number of nibbles, padding at the bottom.
    let nibbles = layout.fraction_bits.div_ceil(4);
    let mut frac = (bits.fraction(layout) as u128) << (nibbles * 4 - layout.fraction_bits);
    let mut lead = bits.integer_bit(layout);
    let is_zero = lead == 0 && frac == 0;
    let mut exp = if is_zero { 0 } else { bits.unbiased_exponent(layout) };

    let digits = match precision {
        None => {
            if frac == 0 { 0 } else { nibbles - frac.trailing_zeros() / 4 }
        }
        Some(p) if p < nibbles as usize => {
            let p = p as u32;
            let dropped = (nibbles - p) * 4;
            let half = 1u128 << (dropped - 1);
            let rest = frac & ((1 << dropped) - 1);
            frac >>= dropped;
            // the last kept digit is the integer digit when no fraction is kept
            let odd = if p == 0 { lead & 1 == 1 } else { frac & 1 == 1 };
            if rest > half || (rest == half && odd) {
                frac += 1;
                if frac >> (p * 4) != 0 {
                    // carried into the integer digit
                    frac = 0;
                    lead += 1;
                }
            }
            if lead > 1 {
                lead = 1;
                exp += 1;
            }
            // `frac` now holds exactly `p` nibbles
            frac <<= dropped;
            p
        }
        Some(_) => nibbles,
    };

    out.push(HEX_DIGITS[lead as usize])?;
    let padding = precision.map_or(0, |p| p.saturating_sub(nibbles as usize));
    if digits > 0 || padding > 0 {
        out.push(b'.')?;
        for i in 0 .. digits {
            let nibble = (frac >> ((nibbles - 1 - i) * 4)) & 0xf;
            out.push(HEX_DIGITS[nibble as usize])?;
        }
        out.fill(b'0', padding)?;
    }

    out.push(b'p')?;
    out.push(if exp < 0 { b'-' } else { b'+' })?;
    out.integer(exp.unsigned_abs() as u64)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hex(layout: &Layout, bits: u128, precision: Option<usize>) -> String {
        let mut buf = [0u8; 64];
        let mut out = Cursor::new(&mut buf);
        format(&mut out, layout.unpack(bits), layout, precision).unwrap();
        let len = out.position();
        String::from_utf8(buf[..len].to_vec()).unwrap()
    }

    fn hex64(x: f64, precision: Option<usize>) -> String {
        hex(&Layout::F64, x.to_bits() as u128, precision)
    }

    fn hex32(x: f32, precision: Option<usize>) -> String {
        hex(&Layout::F32, x.to_bits() as u128, precision)
    }

    /// Reads `[-]0xh.hhhp±d` back into an `f64`, exactly.
    fn parse_hex64(s: &str) -> f64 {
        let (negative, s) = match s.strip_prefix('-') {
            Some(s) => (true, s),
            None => (false, s),
        };
        let s = s.strip_prefix("0x").unwrap();
        let (mant, exp) = s.split_once('p').unwrap();
        let (lead, frac) = mant.split_once('.').unwrap_or((mant, ""));
        let mut value = u64::from_str_radix(lead, 16).unwrap() as u128;
        for c in frac.chars() {
            value = value << 4 | c.to_digit(16).unwrap() as u128;
        }
        let exp = exp.parse::<i32>().unwrap() - 4 * frac.len() as i32;
        // value < 2^57 and the exponent stays within range, so these steps are exact
        let mut x = value as f64;
        let mut e = exp;
        while e > 0 { x *= 2.0; e -= 1; }
        while e < 0 { x /= 2.0; e += 1; }
        if negative { -x } else { x }
    }

    #[test]
    fn natural() {
        assert_eq!(hex64(1.0, None), "0x1p+0");
        assert_eq!(hex64(-2.0, None), "-0x1p+1");
        assert_eq!(hex64(0.1, None), "0x1.999999999999ap-4");
        assert_eq!(hex64(0.0, None), "0x0p+0");
        assert_eq!(hex64(-0.0, None), "-0x0p+0");
        assert_eq!(hex64(f64::MAX, None), "0x1.fffffffffffffp+1023");
        assert_eq!(hex64(f64::MIN_POSITIVE, None), "0x1p-1022");
        assert_eq!(hex64(f64::from_bits(1), None), "0x0.0000000000001p-1022");
        assert_eq!(hex32(1.23, None), "0x1.3ae148p+0");
        assert_eq!(hex32(f32::from_bits(1), None), "0x0.000002p-126");
        assert_eq!(hex32(-f32::MAX, None), "-0x1.fffffep+127");
    }

    #[test]
    fn precision() {
        assert_eq!(hex64(1.0, Some(3)), "0x1.000p+0");
        assert_eq!(hex64(0.0, Some(2)), "0x0.00p+0");
        assert_eq!(hex64(0.1, Some(0)), "0x1p-3");
        assert_eq!(hex64(0.1, Some(3)), "0x1.99ap-4");
        assert_eq!(hex64(0.1, Some(13)), "0x1.999999999999ap-4");
        assert_eq!(hex64(0.1, Some(15)), "0x1.999999999999a00p-4");
        // ties to even
        assert_eq!(hex64(1.5, Some(0)), "0x1p+1");
        assert_eq!(hex64(2.5, Some(0)), "0x1p+1");
        assert_eq!(hex64(1.03125, Some(1)), "0x1.0p+0");
        assert_eq!(hex64(1.09375, Some(1)), "0x1.2p+0");
        // carry out of the fraction
        assert_eq!(hex64(1.96875, Some(1)), "0x1.0p+1");
        assert_eq!(hex32(f32::MAX, Some(2)), "0x1.00p+128");
        // a subnormal rounding up to the smallest normal
        assert_eq!(hex64(f64::MIN_POSITIVE - f64::from_bits(1), Some(12)), "0x1.000000000000p-1022");
    }

    #[test]
    fn extended() {
        // x87 1.0 and the smallest subnormal
        assert_eq!(hex(&Layout::F80, 0x3fff_8000_0000_0000_0000, None), "0x1p+0");
        assert_eq!(hex(&Layout::F80, 1, None), "0x0.0000000000000002p-16382");
        assert_eq!(hex(&Layout::F80, 0xbfff_c000_0000_0000_0000, None), "-0x1.8p+0");
        assert_eq!(hex(&Layout::F80, 0x7ffe_ffff_ffff_ffff_ffff, None), "0x1.fffffffffffffffep+16383");
        assert_eq!(hex(&Layout::F80, 0x7ffe_ffff_ffff_ffff_ffff, Some(1)), "0x1.0p+16384");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200_000))]

        #[test]
        fn roundtrip(bits in 0u64 .. f64::INFINITY.to_bits()) {
            let x = f64::from_bits(bits);
            prop_assert_eq!(parse_hex64(&hex64(x, None)).to_bits(), bits);
            prop_assert_eq!(parse_hex64(&hex64(-x, None)).to_bits(), (-x).to_bits());
        }
    }
}
