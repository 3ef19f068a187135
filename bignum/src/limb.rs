//! Single-limb carry primitives shared by the magnitude algorithms.

/// One base-2^64 digit of a magnitude.
pub(crate) type Limb = u64;

/// Add with carry: (result, carry) = a + b + carry_in
#[inline(always)]
pub(crate) const fn adc(a: Limb, b: Limb, carry: Limb) -> (Limb, Limb) {
    let tmp = a as u128 + b as u128 + carry as u128;
    (tmp as Limb, (tmp >> 64) as Limb)
}

/// Subtract with borrow: (result, borrow) = a - b - borrow_in
#[inline(always)]
pub(crate) const fn sbb(a: Limb, b: Limb, borrow: Limb) -> (Limb, Limb) {
    let tmp = (a as u128)
        .wrapping_sub(b as u128)
        .wrapping_sub(borrow as u128);
    (tmp as Limb, (tmp >> 127) as Limb)
}

/// Multiply-accumulate: (lo, carry) = a * b + c + carry_in
#[inline(always)]
pub(crate) const fn mac(a: Limb, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
    let tmp = a as u128 * b as u128 + c as u128 + carry as u128;
    (tmp as Limb, (tmp >> 64) as Limb)
}
