use std::cmp::Ordering;

use crate::integer::BigInteger;
use crate::limb::Limb;

/// Compare two trimmed magnitudes, ignoring sign.
///
/// More limbs means a larger magnitude; equal lengths compare limb by limb
/// from the most significant end.
pub(crate) fn cmp_magnitude(a: &[Limb], b: &[Limb]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => {}
        ord => return ord,
    }
    for i in (0..a.len()).rev() {
        match a[i].cmp(&b[i]) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

impl BigInteger {
    /// Three-way comparison of signed values. Allocates nothing.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use bignum::BigInteger;
    ///
    /// let a = BigInteger::from(-5);
    /// let b = BigInteger::from(3);
    /// assert_eq!(a.compare(&b), Ordering::Less);
    /// ```
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_magnitude(&self.limbs, &other.limbs),
            (true, true) => cmp_magnitude(&self.limbs, &other.limbs).reverse(),
        }
    }

    /// Compare absolute values.
    pub fn compare_magnitude(&self, other: &Self) -> Ordering {
        cmp_magnitude(&self.limbs, &other.limbs)
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
