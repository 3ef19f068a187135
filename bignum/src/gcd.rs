//! Extended Euclidean algorithm, GCD and LCM.

use crate::div::div_rem_magnitude;
use crate::integer::BigInteger;
use crate::mul::mul_magnitude;

impl BigInteger {
    /// Returns `(g, x, y)` with `g = gcd(|self|, |other|) = self·x + other·y`.
    ///
    /// `g` is never negative; `extended_gcd(0, 0)` is `(0, 1, 0)`.
    ///
    /// ```
    /// use bignum::BigInteger;
    ///
    /// let a = BigInteger::from(240);
    /// let b = BigInteger::from(46);
    /// let (g, x, y) = a.extended_gcd(&b);
    /// assert_eq!(g, BigInteger::from(2));
    /// assert_eq!(a.multiply(&x).add(&b.multiply(&y)), g);
    /// ```
    pub fn extended_gcd(&self, other: &Self) -> (Self, Self, Self) {
        let (mut a, mut b) = (self.clone(), other.clone());
        let (mut x0, mut y0) = (Self::one(), Self::zero());
        let (mut x1, mut y1) = (Self::zero(), Self::one());

        while !b.is_zero() {
            let (q, r) = a.div_rem_nonzero(&b);
            let x2 = x0.subtract(&q.multiply(&x1));
            let y2 = y0.subtract(&q.multiply(&y1));
            x0 = std::mem::replace(&mut x1, x2);
            y0 = std::mem::replace(&mut y1, y2);
            a = std::mem::replace(&mut b, r);
        }

        // A negative input that divides the other (or faces a zero) ends
        // the loop with a negative `a`.
        if a.is_negative() {
            (a.negated(), x0.negated(), y0.negated())
        } else {
            (a, x0, y0)
        }
    }

    /// Greatest common divisor of the absolute values.
    ///
    /// ```
    /// use bignum::BigInteger;
    ///
    /// assert_eq!(BigInteger::from(48).gcd(&BigInteger::from(-18)), BigInteger::from(6));
    /// ```
    pub fn gcd(&self, other: &Self) -> Self {
        self.extended_gcd(other).0
    }

    /// Least common multiple, never negative; zero if either operand is zero.
    ///
    /// ```
    /// use bignum::BigInteger;
    ///
    /// assert_eq!(BigInteger::from(4).lcm(&BigInteger::from(6)), BigInteger::from(12));
    /// ```
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let g = self.gcd(other);
        let (reduced, _) = div_rem_magnitude(&self.limbs, &g.limbs);
        Self::from_parts(false, mul_magnitude(&reduced, &other.limbs))
    }
}
