//! Conversions between `BigInteger` and the `num-bigint` reference type.

use bignum::BigInteger;
use num_bigint::{BigInt, BigUint, Sign};

pub fn to_reference(x: &BigInteger) -> BigInt {
    let bytes: Vec<u8> = x.limbs().iter().flat_map(|l| l.to_le_bytes()).collect();
    let sign = if x.is_negative() { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, BigUint::from_bytes_le(&bytes))
}

pub fn from_reference(x: &BigInt) -> BigInteger {
    let (sign, digits) = x.to_u64_digits();
    BigInteger::from_sign_limbs(sign == Sign::Minus, digits)
}

/// Sign-for-sign, limb-for-limb equality.
pub fn same(ours: &BigInteger, reference: &BigInt) -> bool {
    let (sign, digits) = reference.to_u64_digits();
    let limbs_match = if digits.is_empty() {
        ours.limbs() == [0u64].as_slice()
    } else {
        ours.limbs() == digits.as_slice()
    };
    limbs_match && ours.is_negative() == (sign == Sign::Minus)
}
