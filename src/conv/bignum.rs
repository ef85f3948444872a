//! Fixed-capacity arbitrary precision unsigned integers, just enough for exact digit generation.

use core::cmp::Ordering;

use crate::conv::wide;

/// An unsigned integer stored in `N` little-endian 64-bit limbs.
///
/// Limbs at or above `size` are always zero; limbs below it may be zero too. Operations whose
/// result does not fit in `N` limbs panic, so callers pick `N` for the widest value they need.
#[derive(Clone)]
pub struct Big<const N: usize> {
    size: usize,
    base: [u64; N],
}

impl<const N: usize> Big<N> {
    pub fn from_u64(v: u64) -> Self {
        let mut base = [0; N];
        base[0] = v;
        Big { size: 1, base }
    }

    pub fn is_zero(&self) -> bool {
        self.base[..self.size].iter().all(|&v| v == 0)
    }

    pub fn add(&mut self, other: &Self) -> &mut Self {
        let sz = self.size.max(other.size);
        let mut carry = false;
        for (a, &b) in self.base[..sz].iter_mut().zip(&other.base[..sz]) {
            let (v, c1) = a.overflowing_add(b);
            let (v, c2) = v.overflowing_add(carry as u64);
            *a = v;
            carry = c1 || c2;
        }
        self.size = sz;
        if carry {
            self.base[sz] = 1;
            self.size += 1;
        }
        self
    }

    /// Subtracts `other`, which must not be larger than `self`.
    pub fn sub(&mut self, other: &Self) -> &mut Self {
        let sz = self.size.max(other.size);
        let mut borrow = false;
        for (a, &b) in self.base[..sz].iter_mut().zip(&other.base[..sz]) {
            let (v, c1) = a.overflowing_sub(b);
            let (v, c2) = v.overflowing_sub(borrow as u64);
            *a = v;
            borrow = c1 || c2;
        }
        debug_assert!(!borrow);
        self.size = sz;
        self
    }

    pub fn mul_small(&mut self, other: u64) -> &mut Self {
        let mut carry = 0;
        for a in &mut self.base[..self.size] {
            let p = wide::umul128(*a, other);
            let (v, c) = p.low.overflowing_add(carry);
            *a = v;
            carry = p.high + c as u64;
        }
        if carry > 0 {
            self.base[self.size] = carry;
            self.size += 1;
        }
        self
    }

    /// Multiplies by `2^bits`.
    pub fn mul_pow2(&mut self, bits: usize) -> &mut Self {
        let digits = bits / 64;
        let bits = (bits % 64) as u32;

        // shift by `digits` whole limbs
        self.base.copy_within(..self.size, digits);
        self.base[..digits].fill(0);
        let mut sz = self.size + digits;

        // shift by the remaining `bits`
        if bits > 0 {
            let overflow = self.base[sz - 1] >> (64 - bits);
            if overflow > 0 {
                self.base[sz] = overflow;
            }
            for i in (digits + 1 .. sz).rev() {
                self.base[i] = self.base[i] << bits | self.base[i - 1] >> (64 - bits);
            }
            self.base[digits] <<= bits;
            if overflow > 0 {
                sz += 1;
            }
        }

        self.size = sz;
        self
    }

    /// Multiplies by the little-endian limbs `other`.
    pub fn mul_digits(&mut self, other: &[u64]) -> &mut Self {
        let mut ret = [0u64; N];
        let mut retsz = 0;
        for (i, &a) in self.base[..self.size].iter().enumerate() {
            if a == 0 {
                continue
            }
            let mut sz = other.len();
            let mut carry = 0;
            for (j, &b) in other.iter().enumerate() {
                // a * b + ret + carry never exceeds 2^128 - 1
                let p = wide::umul128(a, b);
                let (v, c1) = ret[i + j].overflowing_add(p.low);
                let (v, c2) = v.overflowing_add(carry);
                ret[i + j] = v;
                carry = p.high + c1 as u64 + c2 as u64;
            }
            if carry > 0 {
                ret[i + sz] = carry;
                sz += 1;
            }
            retsz = retsz.max(i + sz);
        }
        self.base = ret;
        self.size = retsz.max(1);
        self
    }

    /// Divides by `other` in place, returning the remainder.
    pub fn div_rem_small(&mut self, other: u64) -> u64 {
        debug_assert!(other > 0);
        let mut borrow = 0u64;
        for a in self.base[..self.size].iter_mut().rev() {
            let v = (borrow as u128) << 64 | *a as u128;
            *a = (v / other as u128) as u64;
            borrow = (v % other as u128) as u64;
        }
        borrow
    }
}

impl<const N: usize> PartialEq for Big<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<const N: usize> Eq for Big<N> {}

impl<const N: usize> PartialOrd for Big<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<const N: usize> Ord for Big<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        let sz = self.size.max(other.size);
        self.base[..sz].iter().rev().cmp(other.base[..sz].iter().rev())
    }
}

impl<const N: usize> core::fmt::Debug for Big<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sz = self.size.max(1);
        write!(f, "{:#x}", self.base[sz - 1])?;
        for &v in self.base[..sz - 1].iter().rev() {
            write!(f, "_{v:016x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type Big4 = Big<4>;

    fn value(x: &Big4) -> u128 {
        assert!(x.base[2..].iter().all(|&v| v == 0));
        (x.base[1] as u128) << 64 | x.base[0] as u128
    }

    #[test]
    fn small_arithmetic() {
        let mut x = Big4::from_u64(u64::MAX);
        x.add(&Big4::from_u64(1));
        assert_eq!(value(&x), 1 << 64);
        x.sub(&Big4::from_u64(1));
        assert_eq!(value(&x), u64::MAX as u128);
        x.mul_small(10);
        assert_eq!(value(&x), u64::MAX as u128 * 10);
        assert_eq!(x.div_rem_small(7), (u64::MAX as u128 * 10 % 7) as u64);
        assert_eq!(value(&x), u64::MAX as u128 * 10 / 7);
    }

    #[test]
    fn shifts() {
        let mut x = Big4::from_u64(1);
        x.mul_pow2(64);
        assert_eq!(value(&x), 1 << 64);
        let mut x = Big4::from_u64(3);
        x.mul_pow2(127);
        assert_eq!(x.base[..3], [0, 1 << 63, 1]);
        let mut x = Big4::from_u64(0);
        x.mul_pow2(100);
        assert!(x.is_zero());
    }

    #[test]
    fn ordering() {
        let mut a = Big4::from_u64(5);
        let b = Big4::from_u64(5);
        assert_eq!(a, b);
        a.mul_pow2(64);
        assert!(a > b);
        a.sub(&a.clone());
        assert!(a.is_zero());
        assert!(a < b);
        assert_eq!(a, Big4::from_u64(0));
    }

    proptest! {
        #[test]
        fn mul_digits_matches_u128(a: u64, b: u64, c: u64) {
            let mut x = Big4::from_u64(a);
            x.mul_digits(&[b]);
            prop_assert_eq!(value(&x), a as u128 * b as u128);

            let mut x = Big4::from_u64(a);
            x.mul_small(b);
            prop_assert_eq!(value(&x), a as u128 * b as u128);

            let mut x = Big4::from_u64(a);
            x.mul_digits(&[b, c]);
            let mut y = Big4::from_u64(a);
            y.mul_small(c).mul_pow2(64);
            y.add(Big4::from_u64(a).mul_small(b));
            prop_assert_eq!(x, y);
        }

        #[test]
        fn mul_pow2_matches_u128(a: u64, bits in 0usize .. 64) {
            let mut x = Big4::from_u64(a);
            x.mul_pow2(bits);
            prop_assert_eq!(value(&x), (a as u128) << bits);
        }
    }
}
