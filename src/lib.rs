//! Locale-independent conversion of floating point numbers to text, in the manner of C++'s
//! `std::to_chars`.
//!
//! Output goes into a caller-provided byte buffer and never allocates. Four notations are
//! supported (see [Format]), each either with the shortest text that reads back to the same value
//! or with an explicit precision and exact rounding. Besides `f32` and `f64`, the x87 80-bit
//! extended format is supported through [F80].
//!
//! ## Example
//!
//! ```
//! use charconv::Format;
//!
//! let mut buf = [0u8; 32];
//! let len = charconv::to_chars(&mut buf, 0.125f64, Format::Scientific, 2).unwrap();
//! assert_eq!(&buf[..len], b"1.2e-01");
//!
//! let mut buffer = charconv::Buffer::new();
//! assert_eq!(buffer.format(1e-7f64), "1e-07");
//! assert_eq!(buffer.format_hex(1.0f32), "0x1p+0");
//! ```

#![cfg_attr(not(test), no_std)]

mod conv;
pub use conv::common::Decimal;
pub use conv::{F80, Float, Format, Shortest, to_chars};

/// The full-width multiply that the digit generators are built on.
pub use conv::wide;

/// Failure of a conversion.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq, Hash)]
pub enum Error {
    /// The text does not fit in the buffer.
    ValueTooLarge,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::ValueTooLarge => f.write_str("value too large for the output buffer"),
        }
    }
}

impl core::error::Error for Error {}

/// Finds the shortest decimal `significand * 10^exponent` that reads back as `num`, choosing the
/// closest one (ties to even) if there are several.
///
/// **`num` must be finite**; otherwise the result is unspecified.
///
/// ## Example
///
/// ```
/// let decimal = charconv::to_decimal(-0.3f64);
/// assert_eq!((decimal.significand, decimal.exponent, decimal.negative), (3, -1, true));
/// ```
#[inline]
pub fn to_decimal<F: Shortest>(num: F) -> Decimal {
    num.decimal()
}

/// Safe API for formatting floating point numbers to text, with the shortest round-trip
/// precision.
///
/// ## Example
///
/// ```
/// let mut buffer = charconv::Buffer::new();
/// assert_eq!(buffer.format_exp(1.234f64), "1.234e+00");
/// assert_eq!(buffer.format(f64::NAN), "nan");
/// ```
#[derive(Clone, Copy)]
pub struct Buffer {
    bytes: [u8; BUFFER_LEN],
}

/// Holds the longest output of every supported type, see [Float::MAX_CHARS].
const BUFFER_LEN: usize = 32;

impl Buffer {
    /// This is a cheap operation; you don't need to worry about reusing buffers for efficiency.
    pub fn new() -> Self {
        Buffer { bytes: [0; BUFFER_LEN] }
    }

    /// Prints `num` into this buffer in [Format::General], and returns a reference to its text
    /// within the buffer.
    pub fn format<F: Float>(&mut self, num: F) -> &str {
        self.print(num, Format::General)
    }

    /// Prints `num` into this buffer in [Format::Scientific], and returns a reference to its text
    /// within the buffer.
    pub fn format_exp<F: Float>(&mut self, num: F) -> &str {
        self.print(num, Format::Scientific)
    }

    /// Prints `num` into this buffer in [Format::Hex], and returns a reference to its text within
    /// the buffer.
    pub fn format_hex<F: Float>(&mut self, num: F) -> &str {
        self.print(num, Format::Hex)
    }

    fn print<F: Float>(&mut self, num: F, format: Format) -> &str {
        debug_assert!(F::MAX_CHARS <= BUFFER_LEN);
        let n = to_chars(&mut self.bytes, num, format, -1).unwrap_or(0);
        // SAFETY: `to_chars` only writes ASCII.
        unsafe { core::str::from_utf8_unchecked(&self.bytes[..n]) }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer() {
        let mut buffer = Buffer::new();
        assert_eq!(buffer.format(1.5f64), "1.5");
        assert_eq!(buffer.format(-f32::INFINITY), "-inf");
        assert_eq!(buffer.format(F80::from(0.5f64)), "0.5");
        assert_eq!(buffer.format_exp(1e-7f64), "1e-07");
        assert_eq!(buffer.format_exp(-f64::MAX), "-1.7976931348623157e+308");
        assert_eq!(buffer.format_hex(-f64::MAX), "-0x1.fffffffffffffp+1023");
        assert_eq!(
            buffer.format(F80::from_parts(true, 0, 1)),
            "-3.64519953188247460253e-4951",
        );
    }

    #[test]
    fn decimals() {
        assert_eq!(to_decimal(0.0f64), Decimal { significand: 0, exponent: 0, negative: false });
        assert_eq!(to_decimal(-0.0f32), Decimal { significand: 0, exponent: 0, negative: true });
        assert_eq!(to_decimal(1.5e300f64), Decimal { significand: 15, exponent: 299, negative: false });
        assert_eq!(to_decimal(f32::MAX), Decimal { significand: 34028235, exponent: 31, negative: false });
        assert_eq!(to_decimal(5e-324f64), Decimal { significand: 5, exponent: -324, negative: false });
        assert_eq!(to_decimal(-0.0f64), Decimal { significand: 0, exponent: 0, negative: true });
        assert_eq!(to_decimal(-f64::MIN_POSITIVE), Decimal { significand: 22250738585072014, exponent: -324, negative: true });
        assert_eq!(to_decimal(-1.0f32), Decimal { significand: 1, exponent: 0, negative: true });
    }

    #[test]
    fn errors() {
        assert_eq!(Error::ValueTooLarge.to_string(), "value too large for the output buffer");
    }
}
