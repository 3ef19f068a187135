use anyhow::{bail, Context, Result};
use bignum::BigInteger;
use num_bigint::BigInt;

use crate::reference::{same, to_reference};

/// Compute `base^exp` (minus one if asked) with both engines.
///
/// Returns our result after checking it limb for limb against the reference.
pub fn pow_command(base: &str, exp: u64, minus_one: bool) -> Result<BigInteger> {
    let _span = tracing::info_span!("pow", base, exp, minus_one).entered();
    let ours_base: BigInteger = base
        .parse()
        .with_context(|| format!("invalid base {base:?}"))?;
    let reference_exp = u32::try_from(exp).context("reference engine needs an exponent below 2^32")?;

    let mut ours = ours_base.pow(exp);
    let mut reference = to_reference(&ours_base).pow(reference_exp);
    if minus_one {
        ours -= BigInteger::one();
        reference -= BigInt::from(1);
    }
    tracing::info!(limbs = ours.limbs().len(), bits = ours.bit_length(), "computed");

    println!("Number of limbs: {}", ours.limbs().len());
    if !same(&ours, &reference) {
        println!("FAIL pow");
        bail!("pow mismatch for {base}^{exp}");
    }
    println!("PASS pow");
    Ok(ours)
}
