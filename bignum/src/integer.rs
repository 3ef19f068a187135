//! The `BigInteger` value type and its normal form.

use crate::limb::Limb;

/// Arbitrary-precision signed integer.
///
/// Limbs are stored in little-endian order (`limbs[0]` is least significant).
/// Every value is kept normalized: at least one limb, no most-significant
/// zero limb unless the value is zero, and zero is never negative. Because
/// the normal form is unique, the derived `PartialEq`/`Hash` are value
/// equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    pub(crate) negative: bool,
    pub(crate) limbs: Vec<Limb>,
}

// ============================================================================
// Normalization
// ============================================================================

/// Strip most-significant zero limbs, keeping at least one limb.
pub(crate) fn trim(limbs: &mut Vec<Limb>) {
    while limbs.len() > 1 && limbs[limbs.len() - 1] == 0 {
        limbs.pop();
    }
    if limbs.is_empty() {
        limbs.push(0);
    }
}

/// Whether a magnitude denotes zero. Only valid on trimmed magnitudes.
#[inline]
pub(crate) fn is_zero_magnitude(limbs: &[Limb]) -> bool {
    limbs.len() == 1 && limbs[0] == 0
}

impl BigInteger {
    /// Restore the normal form after a mutation of `limbs` or `negative`.
    pub(crate) fn normalize(&mut self) {
        trim(&mut self.limbs);
        if is_zero_magnitude(&self.limbs) {
            self.negative = false;
        }
    }

    /// Build a normalized value from a sign and a raw magnitude.
    pub(crate) fn from_parts(negative: bool, limbs: Vec<Limb>) -> Self {
        let mut value = Self { negative, limbs };
        value.normalize();
        value
    }
}

// ============================================================================
// Construction and read access
// ============================================================================

impl BigInteger {
    /// The value 0.
    pub fn zero() -> Self {
        Self {
            negative: false,
            limbs: vec![0],
        }
    }

    /// The value 1.
    pub fn one() -> Self {
        Self {
            negative: false,
            limbs: vec![1],
        }
    }

    /// Construct from a sign and little-endian limbs, normalizing.
    ///
    /// Trailing zero limbs are dropped, an empty slice is zero, and a
    /// negative zero becomes non-negative.
    ///
    /// ```
    /// use bignum::BigInteger;
    ///
    /// let x = BigInteger::from_sign_limbs(true, vec![0, 1, 0, 0]);
    /// assert_eq!(x.limbs(), &[0, 1]);
    /// assert!(x.is_negative());
    ///
    /// let z = BigInteger::from_sign_limbs(true, vec![]);
    /// assert!(z.is_zero() && !z.is_negative());
    /// ```
    pub fn from_sign_limbs(negative: bool, limbs: Vec<u64>) -> Self {
        Self::from_parts(negative, limbs)
    }

    /// Little-endian limbs of the magnitude. Never empty.
    #[inline]
    pub fn limbs(&self) -> &[u64] {
        &self.limbs
    }

    /// Whether this value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Whether this value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        is_zero_magnitude(&self.limbs)
    }

    /// Whether this value is odd.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.limbs[0] & 1 == 1
    }

    /// -1, 0 or 1 according to the sign.
    pub fn signum(&self) -> i32 {
        if self.negative {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            limbs: self.limbs.clone(),
        }
    }

    /// Number of significant bits in the magnitude (0 for zero).
    pub fn bit_length(&self) -> u64 {
        let top = self.limbs[self.limbs.len() - 1];
        (self.limbs.len() as u64 - 1) * 64 + (64 - top.leading_zeros() as u64)
    }
}

impl Default for BigInteger {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        Self::from_parts(value < 0, vec![value.unsigned_abs()])
    }
}

impl From<i32> for BigInteger {
    fn from(value: i32) -> Self {
        Self::from(value as i64)
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self {
            negative: false,
            limbs: vec![value],
        }
    }
}

impl From<u32> for BigInteger {
    fn from(value: u32) -> Self {
        Self::from(value as u64)
    }
}

// ============================================================================
// Tests
// ============================================================================
