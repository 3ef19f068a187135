//! Arbitrary-precision signed integers.
//!
//! A [`BigInteger`] is a sign flag plus a little-endian sequence of 64-bit
//! limbs, kept in a unique normal form after every operation. Multiplication
//! switches from the schoolbook grid to Karatsuba above
//! [`KARATSUBA_THRESHOLD`] limbs; division is Euclidean (the remainder is
//! never negative).
//!
//! ```
//! use bignum::BigInteger;
//!
//! let a: BigInteger = "-7".parse().unwrap();
//! let b = BigInteger::from(3);
//! let (q, r) = a.div_rem(&b).unwrap();
//! assert_eq!(q.to_string(), "-3");
//! assert_eq!(r.to_string(), "2");
//! ```

pub mod error;
pub mod integer;

mod add;
mod cmp;
mod div;
mod fmt;
mod gcd;
mod limb;
mod mul;
mod ops;
mod pow;
mod serde_impl;

pub use error::BigIntError;
pub use integer::BigInteger;
pub use mul::KARATSUBA_THRESHOLD;

/// Parse a decimal literal into a [`BigInteger`].
///
/// Panics if the literal is not a valid decimal integer.
///
/// ```
/// use bignum::bigint;
///
/// let x = bigint!("123456789012345678901234567890");
/// assert_eq!(x.limbs().len(), 2);
/// let y = bigint!(-42);
/// assert!(y.is_negative());
/// ```
#[macro_export]
macro_rules! bigint {
    ($lit:literal) => {
        <$crate::BigInteger as ::core::str::FromStr>::from_str(&::std::format!("{}", $lit))
            .expect("invalid BigInteger literal")
    };
}
