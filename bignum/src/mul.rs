//! Schoolbook and Karatsuba multiplication.

use crate::add::{add_magnitude, add_shifted_in_place, sub_magnitude};
use crate::integer::{trim, BigInteger};
use crate::limb::{mac, Limb};

/// Operand size, in limbs, at or below which the schoolbook grid is used.
pub const KARATSUBA_THRESHOLD: usize = 32;

// ============================================================================
// Magnitude kernels
// ============================================================================

/// O(n·m) limb grid, trimmed.
pub(crate) fn school_mul_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let mut wide = vec![0; a.len() + b.len()];
    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry = 0;
        for (j, &bj) in b.iter().enumerate() {
            let (lo, hi) = mac(ai, bj, wide[i + j], carry);
            wide[i + j] = lo;
            carry = hi;
        }
        wide[i + b.len()] = carry;
    }
    trim(&mut wide);
    wide
}

/// Split a magnitude at limb `k` into trimmed (low, high) halves.
fn split_at_limb(a: &[Limb], k: usize) -> (Vec<Limb>, Vec<Limb>) {
    let k = k.min(a.len());
    let mut low = a[..k].to_vec();
    let mut high = a[k..].to_vec();
    trim(&mut low);
    trim(&mut high);
    (low, high)
}

/// Karatsuba recursion over magnitudes, trimmed.
pub(crate) fn karatsuba_mul_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let n = a.len().max(b.len());
    if n <= KARATSUBA_THRESHOLD {
        return school_mul_magnitude(a, b);
    }
    let k = n / 2;
    let (a0, a1) = split_at_limb(a, k);
    let (b0, b1) = split_at_limb(b, k);

    let z0 = karatsuba_mul_magnitude(&a0, &b0);
    let z2 = karatsuba_mul_magnitude(&a1, &b1);
    let mid = karatsuba_mul_magnitude(&add_magnitude(&a0, &a1), &add_magnitude(&b0, &b1));
    // (a0+a1)(b0+b1) >= a0·b0 + a1·b1, so both subtractions stay non-negative.
    let z1 = sub_magnitude(&sub_magnitude(&mid, &z0), &z2);

    // z2·B^(2k) + z1·B^k + z0; the three ranges overlap.
    let mut result = Vec::with_capacity(a.len() + b.len() + 1);
    result.extend_from_slice(&z0);
    add_shifted_in_place(&mut result, &z1, k);
    add_shifted_in_place(&mut result, &z2, 2 * k);
    trim(&mut result);
    result
}

/// Pick the multiplication kernel for the given operand sizes.
///
/// Stateless: the choice depends only on the operand lengths.
pub(crate) fn mul_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    if a.len() <= KARATSUBA_THRESHOLD || b.len() <= KARATSUBA_THRESHOLD {
        school_mul_magnitude(a, b)
    } else {
        karatsuba_mul_magnitude(a, b)
    }
}

/// `limbs *= factor`, in place, growing by at most one limb.
pub(crate) fn mul_limb_in_place(limbs: &mut Vec<Limb>, factor: Limb) {
    let mut carry = 0;
    for limb in limbs.iter_mut() {
        let (lo, hi) = mac(*limb, factor, 0, carry);
        *limb = lo;
        carry = hi;
    }
    if carry != 0 {
        limbs.push(carry);
    }
    trim(limbs);
}

// ============================================================================
// BigInteger API
// ============================================================================

impl BigInteger {
    /// Product of two values, choosing schoolbook or Karatsuba by size.
    ///
    /// ```
    /// use bignum::BigInteger;
    ///
    /// let a = BigInteger::from(-6);
    /// let b = BigInteger::from(7);
    /// assert_eq!(a.multiply(&b), BigInteger::from(-42));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        Self::from_parts(
            self.negative != other.negative,
            mul_magnitude(&self.limbs, &other.limbs),
        )
    }

    /// Product using only the schoolbook grid.
    pub fn school_multiply(&self, other: &Self) -> Self {
        Self::from_parts(
            self.negative != other.negative,
            school_mul_magnitude(&self.limbs, &other.limbs),
        )
    }

    /// Product using Karatsuba above [`KARATSUBA_THRESHOLD`] limbs.
    pub fn karatsuba_multiply(&self, other: &Self) -> Self {
        Self::from_parts(
            self.negative != other.negative,
            karatsuba_mul_magnitude(&self.limbs, &other.limbs),
        )
    }
}

// ============================================================================
// Tests
// ============================================================================
