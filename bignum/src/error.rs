use thiserror::Error;

/// Errors from BigInteger construction and arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BigIntError {
    /// A decimal literal contained something other than an optional leading
    /// `-` followed by ASCII digits. `position` is the byte offset of the
    /// offending character, or the input length if digits were missing.
    #[error("invalid decimal literal at byte {position}")]
    InvalidFormat { position: usize },
    #[error("BigInteger division by zero")]
    DivisionByZero,
    #[error("BigInteger exponent must be non-negative")]
    NegativeExponent,
}
