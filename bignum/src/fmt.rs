//! Decimal parsing and rendering.

use std::fmt;
use std::str::FromStr;

use crate::add::add_magnitude;
use crate::div::div_rem_limb;
use crate::error::BigIntError;
use crate::integer::{is_zero_magnitude, BigInteger};
use crate::mul::mul_limb_in_place;

/// Largest power of ten that fits in a limb, and its digit count.
const DECIMAL_CHUNK: u64 = 10_000_000_000_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 19;

impl BigInteger {
    /// Parse a decimal string: optional leading `-`, then ASCII digits.
    ///
    /// The empty string parses as zero; leading zeros are accepted.
    ///
    /// ```
    /// use bignum::{BigInteger, BigIntError};
    ///
    /// assert_eq!(BigInteger::from_decimal_str("").unwrap(), BigInteger::zero());
    /// assert_eq!(
    ///     BigInteger::from_decimal_str("12a3"),
    ///     Err(BigIntError::InvalidFormat { position: 2 })
    /// );
    /// ```
    pub fn from_decimal_str(s: &str) -> Result<Self, BigIntError> {
        if s.is_empty() {
            return Ok(Self::zero());
        }
        let (negative, digits, offset) = match s.strip_prefix('-') {
            Some(rest) => (true, rest, 1),
            None => (false, s, 0),
        };
        if digits.is_empty() {
            return Err(BigIntError::InvalidFormat { position: s.len() });
        }
        let mut limbs = vec![0];
        for (i, byte) in digits.bytes().enumerate() {
            if !byte.is_ascii_digit() {
                return Err(BigIntError::InvalidFormat { position: offset + i });
            }
            // limbs = limbs * 10 + digit
            mul_limb_in_place(&mut limbs, 10);
            limbs = add_magnitude(&limbs, &[(byte - b'0') as u64]);
        }
        Ok(Self::from_parts(negative, limbs))
    }

    /// Render as a decimal string, `-` prefixed when negative.
    pub fn to_decimal_string(&self) -> String {
        let mut chunks = Vec::new();
        let mut limbs = self.limbs.clone();
        loop {
            let (quotient, chunk) = div_rem_limb(&limbs, DECIMAL_CHUNK);
            chunks.push(chunk);
            if is_zero_magnitude(&quotient) {
                break;
            }
            limbs = quotient;
        }

        let mut out = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS + 1);
        if self.negative {
            out.push('-');
        }
        let mut iter = chunks.iter().rev();
        if let Some(top) = iter.next() {
            out.push_str(&top.to_string());
        }
        for chunk in iter {
            out.push_str(&format!("{:0width$}", chunk, width = DECIMAL_CHUNK_DIGITS));
        }
        out
    }
}

impl FromStr for BigInteger {
    type Err = BigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_str(s)
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({})", self.to_decimal_string())
    }
}
