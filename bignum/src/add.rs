//! Magnitude addition/subtraction and the sign-aware operations built on them.

use std::cmp::Ordering;

use crate::cmp::cmp_magnitude;
use crate::integer::{trim, BigInteger};
use crate::limb::{adc, sbb, Limb};

/// |a| + |b|, trimmed.
pub(crate) fn add_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut result = Vec::with_capacity(long.len() + 1);
    let mut carry = 0;
    for (i, &limb) in long.iter().enumerate() {
        let (r, c) = adc(limb, short.get(i).copied().unwrap_or(0), carry);
        result.push(r);
        carry = c;
    }
    if carry != 0 {
        result.push(carry);
    }
    trim(&mut result);
    result
}

/// |a| - |b|, trimmed. Requires |a| >= |b|.
pub(crate) fn sub_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    debug_assert!(cmp_magnitude(a, b) != Ordering::Less, "sub_magnitude underflow");
    let mut result = Vec::with_capacity(a.len());
    let mut borrow = 0;
    for (i, &limb) in a.iter().enumerate() {
        let (r, bo) = sbb(limb, b.get(i).copied().unwrap_or(0), borrow);
        result.push(r);
        borrow = bo;
    }
    debug_assert_eq!(borrow, 0);
    trim(&mut result);
    result
}

/// `acc += addend << (64 * shift)`, growing `acc` as needed.
///
/// Used where several partial products overlap in the same limb range.
pub(crate) fn add_shifted_in_place(acc: &mut Vec<Limb>, addend: &[Limb], shift: usize) {
    if acc.len() < shift + addend.len() {
        acc.resize(shift + addend.len(), 0);
    }
    let mut carry = 0;
    for (i, &limb) in addend.iter().enumerate() {
        let (r, c) = adc(acc[shift + i], limb, carry);
        acc[shift + i] = r;
        carry = c;
    }
    let mut i = shift + addend.len();
    while carry != 0 {
        if i == acc.len() {
            acc.push(0);
        }
        let (r, c) = adc(acc[i], 0, carry);
        acc[i] = r;
        carry = c;
        i += 1;
    }
}

/// Signed sum of (neg_a, a) and (neg_b, b).
fn signed_add(neg_a: bool, a: &[Limb], neg_b: bool, b: &[Limb]) -> BigInteger {
    if neg_a == neg_b {
        return BigInteger::from_parts(neg_a, add_magnitude(a, b));
    }
    match cmp_magnitude(a, b) {
        Ordering::Equal => BigInteger::zero(),
        Ordering::Greater => BigInteger::from_parts(neg_a, sub_magnitude(a, b)),
        Ordering::Less => BigInteger::from_parts(neg_b, sub_magnitude(b, a)),
    }
}

impl BigInteger {
    /// Sum of two values.
    ///
    /// ```
    /// use bignum::BigInteger;
    ///
    /// let a = BigInteger::from(-10);
    /// let b = BigInteger::from(4);
    /// assert_eq!(a.add(&b), BigInteger::from(-6));
    /// ```
    pub fn add(&self, other: &Self) -> Self {
        signed_add(self.negative, &self.limbs, other.negative, &other.limbs)
    }

    /// Difference `self - other`.
    pub fn subtract(&self, other: &Self) -> Self {
        signed_add(self.negative, &self.limbs, !other.negative, &other.limbs)
    }

    /// Negated copy. Zero stays non-negative.
    pub fn negated(&self) -> Self {
        Self::from_parts(!self.negative, self.limbs.clone())
    }
}
