//! Square-and-multiply exponentiation.

use crate::error::BigIntError;
use crate::integer::{is_zero_magnitude, trim, BigInteger};
use crate::limb::Limb;

/// `limbs >>= 1`, in place.
fn halve_in_place(limbs: &mut Vec<Limb>) {
    let mut carry = 0;
    for limb in limbs.iter_mut().rev() {
        let next = *limb & 1;
        *limb = (*limb >> 1) | (carry << 63);
        carry = next;
    }
    trim(limbs);
}

impl BigInteger {
    /// `self` raised to a machine-integer power. `x.pow(0)` is 1, including
    /// for zero.
    ///
    /// ```
    /// use bignum::BigInteger;
    ///
    /// let x = BigInteger::from(2).pow(10).subtract(&BigInteger::one());
    /// assert_eq!(x.to_string(), "1023");
    /// ```
    pub fn pow(&self, exp: u64) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.multiply(&base);
            }
            exp >>= 1;
            if exp > 0 {
                base = base.multiply(&base);
            }
        }
        result
    }

    /// `self` raised to a BigInteger power.
    ///
    /// ```
    /// use bignum::{BigInteger, BigIntError};
    ///
    /// let x = BigInteger::from(-3).pow_big(&BigInteger::from(5)).unwrap();
    /// assert_eq!(x, BigInteger::from(-243));
    /// assert_eq!(
    ///     BigInteger::from(3).pow_big(&BigInteger::from(-1)),
    ///     Err(BigIntError::NegativeExponent)
    /// );
    /// ```
    pub fn pow_big(&self, exp: &Self) -> Result<Self, BigIntError> {
        if exp.is_negative() {
            return Err(BigIntError::NegativeExponent);
        }
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = exp.limbs.clone();
        while !is_zero_magnitude(&exp) {
            if exp[0] & 1 == 1 {
                result = result.multiply(&base);
            }
            halve_in_place(&mut exp);
            if !is_zero_magnitude(&exp) {
                base = base.multiply(&base);
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_small() {
        assert_eq!(BigInteger::from(2).pow(10), BigInteger::from(1024));
        assert_eq!(BigInteger::from(-2).pow(3), BigInteger::from(-8));
        assert_eq!(BigInteger::from(-2).pow(4), BigInteger::from(16));
    }

    #[test]
    fn test_pow_zero_exponent() {
        assert_eq!(BigInteger::from(12345).pow(0), BigInteger::one());
        assert_eq!(BigInteger::zero().pow(0), BigInteger::one());
        assert_eq!(BigInteger::zero().pow(5), BigInteger::zero());
    }

    #[test]
    fn test_pow_crosses_limbs() {
        let x = BigInteger::from(2).pow(64);
        assert_eq!(x.limbs(), &[0, 1]);
        let y = BigInteger::from(2).pow(200);
        assert_eq!(y.limbs(), &[0, 0, 0, 1 << 8]);
    }

    #[test]
    fn test_pow_matches_repeated_multiply() {
        let base: BigInteger = "-123456789123456789".parse().unwrap();
        let mut expected = BigInteger::one();
        for e in 0..12u64 {
            assert_eq!(base.pow(e), expected, "exponent {e}");
            expected = expected.multiply(&base);
        }
    }

    #[test]
    fn test_pow_big_matches_pow() {
        let base = BigInteger::from(7);
        for e in [0u64, 1, 2, 31, 64, 100] {
            assert_eq!(base.pow_big(&BigInteger::from(e)).unwrap(), base.pow(e));
        }
    }

    #[test]
    fn test_pow_big_negative_exponent() {
        assert_eq!(
            BigInteger::from(2).pow_big(&BigInteger::from(-3)),
            Err(BigIntError::NegativeExponent)
        );
    }

    #[test]
    fn test_pow_big_multi_limb_exponent_of_one() {
        let exp = BigInteger::from_sign_limbs(false, vec![3, 1]); // 2^64 + 3
        assert_eq!(BigInteger::one().pow_big(&exp).unwrap(), BigInteger::one());
        assert_eq!(BigInteger::from(-1).pow_big(&exp).unwrap(), BigInteger::from(-1));
        assert!(BigInteger::zero().pow_big(&exp).unwrap().is_zero());
    }

    #[test]
    fn test_halve_in_place() {
        let mut limbs = vec![0, 1];
        halve_in_place(&mut limbs);
        assert_eq!(limbs, vec![1 << 63]);
        let mut limbs = vec![1];
        halve_in_place(&mut limbs);
        assert_eq!(limbs, vec![0]);
    }
}
