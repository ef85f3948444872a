//! Routines for actually writing the numbers into the caller's buffer.
//!
//! Every write goes through [Cursor], which checks the bounds of the buffer and reports an
//! overrun as [Error::ValueTooLarge] instead of touching anything past its end.

use crate::Error;

const DIGITS_LUT: &[u8; 200] =
    b"00010203040506070809\
      10111213141516171819\
      20212223242526272829\
      30313233343536373839\
      40414243444546474849\
      50515253545556575859\
      60616263646566676869\
      70717273747576777879\
      80818283848586878889\
      90919293949596979899";

/// The two digits of `x`, which must be less than 100.
#[inline]
fn two_digits(x: u32) -> &'static [u8] {
    debug_assert!(x < 100);
    let i = x as usize * 2;
    &DIGITS_LUT[i .. i + 2]
}

/// A write position in a caller-owned buffer.
pub struct Cursor<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(buf: &'a mut [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// The whole underlying buffer, for rearranging bytes that were already written.
    #[inline]
    pub fn buffer(&mut self) -> &mut [u8] {
        &mut *self.buf
    }

    /// The unwritten tail of the buffer. Bytes written there are only kept after [Self::advance].
    #[inline]
    pub fn remaining(&mut self) -> &mut [u8] {
        &mut self.buf[self.pos ..]
    }

    /// Moves the position to `pos`, which must be within the buffer.
    #[inline]
    pub fn seek(&mut self, pos: usize) -> Result<(), Error> {
        if pos > self.buf.len() {
            return Err(Error::ValueTooLarge)
        }
        self.pos = pos;
        Ok(())
    }

    #[inline]
    pub fn advance(&mut self, n: usize) -> Result<(), Error> {
        self.seek(self.pos + n)
    }

    #[inline]
    pub fn push(&mut self, byte: u8) -> Result<(), Error> {
        let slot = self.buf.get_mut(self.pos).ok_or(Error::ValueTooLarge)?;
        *slot = byte;
        self.pos += 1;
        Ok(())
    }

    #[inline]
    pub fn write(&mut self, bytes: &[u8]) -> Result<(), Error> {
        let end = self.pos + bytes.len();
        let slot = self.buf.get_mut(self.pos .. end).ok_or(Error::ValueTooLarge)?;
        slot.copy_from_slice(bytes);
        self.pos = end;
        Ok(())
    }

    #[inline]
    pub fn fill(&mut self, byte: u8, n: usize) -> Result<(), Error> {
        let end = self.pos + n;
        let slot = self.buf.get_mut(self.pos .. end).ok_or(Error::ValueTooLarge)?;
        slot.fill(byte);
        self.pos = end;
        Ok(())
    }

    /// Writes `-` if `negative`.
    #[inline]
    pub fn sign(&mut self, negative: bool) -> Result<(), Error> {
        if negative { self.push(b'-') } else { Ok(()) }
    }

    /// Writes the decimal digits of `x`, returning how many there were.
    #[inline]
    pub fn integer(&mut self, x: u64) -> Result<usize, Error> {
        let mut itoa = itoa::Buffer::new();
        let digits = itoa.format(x).as_bytes();
        self.write(digits)?;
        Ok(digits.len())
    }

    /// Writes a decimal exponent as `e`, a sign, and at least two digits, e.g. `e+05` or `e-308`.
    #[inline]
    pub fn exponent(&mut self, exp: i32) -> Result<(), Error> {
        self.push(b'e')?;
        self.push(if exp < 0 { b'-' } else { b'+' })?;
        let abs = exp.unsigned_abs();
        if abs < 100 {
            self.write(two_digits(abs))
        } else {
            self.integer(abs as u64).map(|_| ())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        let mut buf = [b'#'; 6];
        let mut cursor = Cursor::new(&mut buf[..4]);
        cursor.write(b"ab").unwrap();
        assert_eq!(cursor.write(b"cde"), Err(Error::ValueTooLarge));
        cursor.push(b'c').unwrap();
        assert_eq!(cursor.fill(b'0', 2), Err(Error::ValueTooLarge));
        cursor.fill(b'0', 1).unwrap();
        assert_eq!(cursor.push(b'x'), Err(Error::ValueTooLarge));
        assert_eq!(cursor.position(), 4);
        assert_eq!(cursor.advance(1), Err(Error::ValueTooLarge));
        assert_eq!(&buf, b"abc0##");
    }

    #[test]
    fn exponents() {
        let mut buf = [0u8; 80];
        for (exp, expected) in [
            (0, "e+00"),
            (5, "e+05"),
            (-7, "e-07"),
            (10, "e+10"),
            (-99, "e-99"),
            (100, "e+100"),
            (-308, "e-308"),
            (4951, "e+4951"),
            (-4950, "e-4950"),
        ] {
            let mut cursor = Cursor::new(&mut buf);
            cursor.exponent(exp).unwrap();
            let len = cursor.position();
            assert_eq!(&buf[..len], expected.as_bytes());
        }
    }

    #[test]
    fn integers() {
        let mut buf = [0u8; 80];
        for x in [0, 1, 9, 10, 061295, 99_999_999_999_999_999, u64::MAX] {
            let mut cursor = Cursor::new(&mut buf);
            let len = cursor.integer(x).unwrap();
            assert_eq!(&buf[..len], format!("{x}").as_bytes());
        }
    }

    use proptest::prelude::*;
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200_000))]

        #[test]
        fn proptest_exponent(x in -9999i32 ..= 9999) {
            let mut buf = [0u8; 80];
            let mut cursor = Cursor::new(&mut buf);
            cursor.exponent(x).unwrap();
            let len = cursor.position();
            let std = format!("e{}{:02}", if x < 0 { '-' } else { '+' }, x.unsigned_abs());
            prop_assert_eq!(&buf[..len], std.as_bytes());
        }
    }
}
