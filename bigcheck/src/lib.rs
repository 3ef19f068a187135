//! Verification harness for `bignum`.
//!
//! Every command computes with `bignum` and with `num-bigint`, then compares
//! sign and limbs exactly.

pub mod commands;
pub mod reference;
