//! Property-based tests for the algebraic identities of the engine.
//!
//! Random signed operands of a few limbs exercise carries, borrows and sign
//! handling; wider operands push multiplication past the Karatsuba
//! threshold.

use std::cmp::Ordering;

use bignum::{BigInteger, KARATSUBA_THRESHOLD};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Limbs biased toward 0 and u64::MAX so carry chains show up often.
fn limb() -> impl Strategy<Value = u64> {
    prop_oneof![
        2 => Just(0u64),
        2 => Just(u64::MAX),
        6 => any::<u64>(),
    ]
}

fn big(max_limbs: usize) -> impl Strategy<Value = BigInteger> {
    (any::<bool>(), prop::collection::vec(limb(), 1..=max_limbs))
        .prop_map(|(negative, limbs)| BigInteger::from_sign_limbs(negative, limbs))
}

fn wide() -> impl Strategy<Value = BigInteger> {
    (
        any::<bool>(),
        prop::collection::vec(limb(), KARATSUBA_THRESHOLD - 2..=3 * KARATSUBA_THRESHOLD),
    )
        .prop_map(|(negative, limbs)| BigInteger::from_sign_limbs(negative, limbs))
}

/// Canonical decimal text: optional '-', no leading zeros, never "-0".
fn decimal() -> impl Strategy<Value = String> {
    "-?[1-9][0-9]{0,80}|0"
}

fn is_normalized(x: &BigInteger) -> bool {
    let limbs = x.limbs();
    !limbs.is_empty()
        && (limbs.len() == 1 || limbs[limbs.len() - 1] != 0)
        && !(x.is_zero() && x.is_negative())
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_decimal_roundtrip(s in decimal()) {
        let x: BigInteger = s.parse().unwrap();
        prop_assert!(is_normalized(&x));
        prop_assert_eq!(x.to_string(), s);
    }

    #[test]
    fn prop_additive_inverse(a in big(6), b in big(6)) {
        let sum = a.add(&b);
        prop_assert!(is_normalized(&sum));
        prop_assert_eq!(sum.subtract(&b), a.clone());
        prop_assert_eq!(a.subtract(&a), BigInteger::zero());
    }

    #[test]
    fn prop_add_commutes(a in big(6), b in big(6)) {
        prop_assert_eq!(a.add(&b), b.add(&a));
    }

    #[test]
    fn prop_compare_matches_subtraction_sign(a in big(4), b in big(4)) {
        let diff = a.subtract(&b);
        let expected = match diff.signum() {
            -1 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        };
        prop_assert_eq!(a.compare(&b), expected);
    }

    #[test]
    fn prop_mul_distributes(a in big(5), b in big(5), c in big(5)) {
        let lhs = a.multiply(&b.add(&c));
        let rhs = a.multiply(&b).add(&a.multiply(&c));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn prop_division_identity(a in big(8), b in big(4)) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert!(is_normalized(&q) && is_normalized(&r));
        prop_assert!(!r.is_negative());
        prop_assert_eq!(r.compare_magnitude(&b), Ordering::Less);
        prop_assert_eq!(q.multiply(&b).add(&r), a);
    }

    #[test]
    fn prop_extended_gcd_identity(a in big(3), b in big(3)) {
        let (g, x, y) = a.extended_gcd(&b);
        prop_assert!(!g.is_negative());
        prop_assert_eq!(a.multiply(&x).add(&b.multiply(&y)), g.clone());
        if !g.is_zero() {
            prop_assert!(a.rem(&g).unwrap().is_zero());
            prop_assert!(b.rem(&g).unwrap().is_zero());
        }
    }

    #[test]
    fn prop_lcm_times_gcd(a in big(3), b in big(3)) {
        let product = a.multiply(&b).abs();
        prop_assert_eq!(a.lcm(&b).multiply(&a.gcd(&b)), product);
    }

    #[test]
    fn prop_pow_matches_repeated_multiply(base in big(2), e in 0u64..12) {
        let mut expected = BigInteger::one();
        for _ in 0..e {
            expected = expected.multiply(&base);
        }
        prop_assert_eq!(base.pow(e), expected.clone());
        prop_assert_eq!(base.pow_big(&BigInteger::from(e)).unwrap(), expected);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_karatsuba_matches_school(a in wide(), b in wide()) {
        prop_assert_eq!(a.karatsuba_multiply(&b), a.school_multiply(&b));
    }

    #[test]
    fn prop_wide_division_identity(a in wide(), b in big(40)) {
        prop_assume!(!b.is_zero());
        let (q, r) = a.div_rem(&b).unwrap();
        prop_assert!(!r.is_negative());
        prop_assert_eq!(r.compare_magnitude(&b), Ordering::Less);
        prop_assert_eq!(q.multiply(&b).add(&r), a);
    }
}
