//! Euclidean division: `a = q·b + r` with `0 <= r < |b|`.

use std::cmp::Ordering;

use crate::add::{add_magnitude, sub_magnitude};
use crate::cmp::cmp_magnitude;
use crate::error::BigIntError;
use crate::integer::{is_zero_magnitude, trim, BigInteger};
use crate::limb::Limb;
use crate::mul::mul_limb_in_place;

// ============================================================================
// Magnitude kernels
// ============================================================================

/// Largest digit `q` with `q·divisor <= rem`, together with `q·divisor`.
///
/// Requires `rem < divisor·2^64`, so the digit fits in one limb.
fn quotient_digit(rem: &[Limb], divisor: &[Limb]) -> (Limb, Vec<Limb>) {
    if cmp_magnitude(rem, divisor) == Ordering::Less {
        return (0, vec![0]);
    }
    // lo·divisor <= rem always holds; the answer lies in [lo, hi].
    let mut lo: Limb = 1;
    let mut hi: Limb = Limb::MAX;
    let mut best = divisor.to_vec();
    while lo < hi {
        let mid = lo + (hi - lo) / 2 + 1;
        let mut product = divisor.to_vec();
        mul_limb_in_place(&mut product, mid);
        if cmp_magnitude(&product, rem) == Ordering::Greater {
            hi = mid - 1;
        } else {
            lo = mid;
            best = product;
        }
    }
    (lo, best)
}

/// Long division of magnitudes, most significant limb first.
///
/// Returns trimmed `(|a| / |b|, |a| mod |b|)`. `b` must be non-zero.
pub(crate) fn div_rem_magnitude(a: &[Limb], b: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    debug_assert!(!is_zero_magnitude(b), "division by zero magnitude");
    if cmp_magnitude(a, b) == Ordering::Less {
        return (vec![0], a.to_vec());
    }
    let mut quotient = vec![0; a.len()];
    let mut rem: Vec<Limb> = vec![0];
    for i in (0..a.len()).rev() {
        // rem = rem·2^64 + a[i]
        rem.insert(0, a[i]);
        trim(&mut rem);
        let (q, product) = quotient_digit(&rem, b);
        if q != 0 {
            rem = sub_magnitude(&rem, &product);
        }
        quotient[i] = q;
    }
    trim(&mut quotient);
    (quotient, rem)
}

/// Divide a magnitude by a single non-zero limb: `(quotient, remainder)`.
pub(crate) fn div_rem_limb(a: &[Limb], divisor: Limb) -> (Vec<Limb>, Limb) {
    debug_assert!(divisor != 0);
    let mut quotient = vec![0; a.len()];
    let mut remainder = 0u128;
    for i in (0..a.len()).rev() {
        let combined = (remainder << 64) | a[i] as u128;
        quotient[i] = (combined / divisor as u128) as Limb;
        remainder = combined % divisor as u128;
    }
    trim(&mut quotient);
    (quotient, remainder as Limb)
}

// ============================================================================
// BigInteger API
// ============================================================================

impl BigInteger {
    /// Euclidean quotient and remainder, the remainder never negative.
    ///
    /// ```
    /// use bignum::{BigInteger, BigIntError};
    ///
    /// let (q, r) = BigInteger::from(100).div_rem(&BigInteger::from(7)).unwrap();
    /// assert_eq!((q, r), (BigInteger::from(14), BigInteger::from(2)));
    ///
    /// let (q, r) = BigInteger::from(-7).div_rem(&BigInteger::from(3)).unwrap();
    /// assert_eq!((q, r), (BigInteger::from(-3), BigInteger::from(2)));
    ///
    /// assert_eq!(
    ///     BigInteger::one().div_rem(&BigInteger::zero()),
    ///     Err(BigIntError::DivisionByZero)
    /// );
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), BigIntError> {
        if divisor.is_zero() {
            return Err(BigIntError::DivisionByZero);
        }
        Ok(self.div_rem_nonzero(divisor))
    }

    /// `div_rem` for a divisor already known to be non-zero.
    pub(crate) fn div_rem_nonzero(&self, divisor: &Self) -> (Self, Self) {
        let (mut q, mut r) = div_rem_magnitude(&self.limbs, &divisor.limbs);
        if self.negative && !is_zero_magnitude(&r) {
            // -(Q·|b| + R) = -(Q+1)·|b| + (|b| - R)
            q = add_magnitude(&q, &[1]);
            r = sub_magnitude(&divisor.limbs, &r);
        }
        (
            Self::from_parts(self.negative != divisor.negative, q),
            Self::from_parts(false, r),
        )
    }

    /// Euclidean quotient.
    pub fn div(&self, divisor: &Self) -> Result<Self, BigIntError> {
        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Euclidean remainder, in `[0, |divisor|)`.
    pub fn rem(&self, divisor: &Self) -> Result<Self, BigIntError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Replace `self` with the Euclidean quotient. Unchanged on error.
    pub fn div_assign(&mut self, divisor: &Self) -> Result<(), BigIntError> {
        *self = self.div(divisor)?;
        Ok(())
    }

    /// Replace `self` with the Euclidean remainder. Unchanged on error.
    pub fn rem_assign(&mut self, divisor: &Self) -> Result<(), BigIntError> {
        *self = self.rem(divisor)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn int(s: &str) -> BigInteger {
        s.parse().unwrap()
    }

    fn check_identity(a: &BigInteger, b: &BigInteger) {
        let (q, r) = a.div_rem(b).unwrap();
        assert_eq!(q.multiply(b).add(&r), *a, "identity for {a} / {b}");
        assert!(!r.is_negative(), "remainder sign for {a} / {b}");
        assert_eq!(r.compare_magnitude(b), Ordering::Less, "remainder bound for {a} / {b}");
    }

    #[test]
    fn test_div_small() {
        let (q, r) = BigInteger::from(100).div_rem(&BigInteger::from(7)).unwrap();
        assert_eq!(q.to_string(), "14");
        assert_eq!(r.to_string(), "2");
    }

    #[test]
    fn test_rem_negative_dividend_is_euclidean() {
        assert_eq!(BigInteger::from(-7).rem(&BigInteger::from(3)).unwrap(), BigInteger::from(2));
        assert_eq!(BigInteger::from(-7).div(&BigInteger::from(3)).unwrap(), BigInteger::from(-3));
    }

    #[test]
    fn test_all_sign_combinations() {
        // (a, b, q, r)
        let cases = [
            (7, 3, 2, 1),
            (-7, 3, -3, 2),
            (7, -3, -2, 1),
            (-7, -3, 3, 2),
            (-6, 3, -2, 0),
            (6, -3, -2, 0),
        ];
        for (a, b, q, r) in cases {
            let (gq, gr) = BigInteger::from(a).div_rem(&BigInteger::from(b)).unwrap();
            assert_eq!(gq, BigInteger::from(q), "{a} / {b}");
            assert_eq!(gr, BigInteger::from(r), "{a} % {b}");
        }
    }

    #[test]
    fn test_div_by_zero() {
        let a = BigInteger::from(42);
        assert_eq!(a.div_rem(&BigInteger::zero()), Err(BigIntError::DivisionByZero));
        assert_eq!(a.rem(&BigInteger::zero()), Err(BigIntError::DivisionByZero));
    }

    #[test]
    fn test_div_assign_leaves_value_on_error() {
        let mut a = BigInteger::from(42);
        assert!(a.div_assign(&BigInteger::zero()).is_err());
        assert_eq!(a, BigInteger::from(42));
        a.div_assign(&BigInteger::from(5)).unwrap();
        assert_eq!(a, BigInteger::from(8));
        a.rem_assign(&BigInteger::from(-3)).unwrap();
        assert_eq!(a, BigInteger::from(2));
    }

    #[test]
    fn test_dividend_smaller_than_divisor() {
        let a = int("12345");
        let b = int("340282366920938463463374607431768211456"); // 2^128
        let (q, r) = a.div_rem(&b).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, a);

        let (q, r) = a.negated().div_rem(&b).unwrap();
        assert_eq!(q, BigInteger::from(-1));
        assert_eq!(r, b.subtract(&a));
    }

    #[test]
    fn test_multi_limb_division() {
        let a = int("340282366920938463463374607431768211457"); // 2^128 + 1
        let b = int("18446744073709551617"); // 2^64 + 1
        let (q, r) = a.div_rem(&b).unwrap();
        // 2^128 + 1 = (2^64 - 1)(2^64 + 1) + 2
        assert_eq!(q.limbs(), &[u64::MAX]);
        assert_eq!(r, BigInteger::from(2));
    }

    #[test]
    fn test_identity_on_wide_values() {
        let a = int("-98765432109876543210987654321098765432109876543210987654321");
        let b = int("1234567890123456789012345678901");
        check_identity(&a, &b);
        check_identity(&a, &b.negated());
        check_identity(&a.negated(), &b);
        check_identity(&b, &BigInteger::from(u64::MAX));
        check_identity(&a, &BigInteger::from(-1));
    }

    #[test]
    fn test_quotient_digit_max() {
        // rem = 2^64·d - 1 needs digit 2^64 - 1
        let d = vec![3u64];
        let rem = vec![u64::MAX, 2];
        let (q, product) = quotient_digit(&rem, &d);
        assert_eq!(q, u64::MAX);
        assert_eq!(product, vec![u64::MAX - 2, 2]);
    }

    #[test]
    fn test_div_rem_limb() {
        let (q, r) = div_rem_limb(&[0, 1], 10);
        // 2^64 = 1844674407370955161·10 + 6
        assert_eq!(q, vec![1844674407370955161]);
        assert_eq!(r, 6);
    }
}
