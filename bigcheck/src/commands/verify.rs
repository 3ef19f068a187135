use anyhow::{bail, Result};
use bignum::BigInteger;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, Zero};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::reference::{same, to_reference};

/// Pass/fail tally for one operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OpReport {
    pub name: &'static str,
    pub passed: usize,
    pub failed: usize,
}

/// Results of a `verify` run, one entry per operation.
#[derive(Debug, Default)]
pub struct VerifyReport {
    pub ops: Vec<OpReport>,
}

impl VerifyReport {
    pub fn total_failed(&self) -> usize {
        self.ops.iter().map(|op| op.failed).sum()
    }

    pub fn total_passed(&self) -> usize {
        self.ops.iter().map(|op| op.passed).sum()
    }
}

type Check = fn(&BigInteger, &BigInteger) -> bool;

const CHECKS: &[(&str, Check)] = &[
    ("add", check_add),
    ("subtract", check_subtract),
    ("multiply", check_multiply),
    ("school_multiply", check_school_multiply),
    ("karatsuba_multiply", check_karatsuba_multiply),
    ("div", check_div),
    ("rem", check_rem),
    ("gcd", check_gcd),
    ("lcm", check_lcm),
    ("pow", check_pow),
];

fn random_operand(rng: &mut StdRng, max_limbs: usize) -> BigInteger {
    let len = rng.gen_range(1..=max_limbs.max(1));
    let limbs = (0..len)
        .map(|_| match rng.gen_range(0..8) {
            0 => 0,
            1 => u64::MAX,
            _ => rng.gen(),
        })
        .collect();
    BigInteger::from_sign_limbs(rng.gen_bool(0.5), limbs)
}

/// Euclidean quotient and remainder on the reference side.
fn reference_div_rem(a: &BigInt, b: &BigInt) -> (BigInt, BigInt) {
    let (mut q, mut r) = a.div_mod_floor(b);
    if r.is_negative() {
        r += b.abs();
        q += 1;
    }
    (q, r)
}

fn check_add(a: &BigInteger, b: &BigInteger) -> bool {
    same(&a.add(b), &(to_reference(a) + to_reference(b)))
}

fn check_subtract(a: &BigInteger, b: &BigInteger) -> bool {
    same(&a.subtract(b), &(to_reference(a) - to_reference(b)))
}

fn check_multiply(a: &BigInteger, b: &BigInteger) -> bool {
    same(&a.multiply(b), &(to_reference(a) * to_reference(b)))
}

fn check_school_multiply(a: &BigInteger, b: &BigInteger) -> bool {
    same(&a.school_multiply(b), &(to_reference(a) * to_reference(b)))
}

fn check_karatsuba_multiply(a: &BigInteger, b: &BigInteger) -> bool {
    same(&a.karatsuba_multiply(b), &(to_reference(a) * to_reference(b)))
}

fn check_div(a: &BigInteger, b: &BigInteger) -> bool {
    match a.div(b) {
        Ok(q) => same(&q, &reference_div_rem(&to_reference(a), &to_reference(b)).0),
        Err(_) => b.is_zero(),
    }
}

fn check_rem(a: &BigInteger, b: &BigInteger) -> bool {
    match a.rem(b) {
        Ok(r) => same(&r, &reference_div_rem(&to_reference(a), &to_reference(b)).1),
        Err(_) => b.is_zero(),
    }
}

fn check_gcd(a: &BigInteger, b: &BigInteger) -> bool {
    let (ra, rb) = (to_reference(a), to_reference(b));
    let (g, x, y) = a.extended_gcd(b);
    same(&g, &ra.gcd(&rb)) && ra * to_reference(&x) + rb * to_reference(&y) == to_reference(&g)
}

fn check_lcm(a: &BigInteger, b: &BigInteger) -> bool {
    let (ra, rb) = (to_reference(a), to_reference(b));
    let expected = if ra.is_zero() || rb.is_zero() {
        BigInt::zero()
    } else {
        ra.lcm(&rb)
    };
    same(&a.lcm(b), &expected)
}

/// Raises `a` to a small exponent taken from the low bits of `b`.
fn check_pow(a: &BigInteger, b: &BigInteger) -> bool {
    let e = (b.limbs()[0] % 8) as u32;
    same(&a.pow(e as u64), &to_reference(a).pow(e))
}

/// Run every check `rounds` times on fresh random operands.
///
/// GCD and LCM operands are capped at 8 limbs to bound Euclid's step count.
pub fn run_verify(seed: u64, rounds: usize, max_limbs: usize) -> VerifyReport {
    let _span = tracing::info_span!("verify", seed, rounds, max_limbs).entered();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut report = VerifyReport::default();

    for &(name, check) in CHECKS {
        let width = match name {
            "gcd" | "lcm" => max_limbs.min(8),
            "pow" => max_limbs.min(4),
            _ => max_limbs,
        };
        let mut op = OpReport {
            name,
            ..OpReport::default()
        };
        for round in 0..rounds {
            let a = random_operand(&mut rng, width);
            let b = random_operand(&mut rng, width);
            if check(&a, &b) {
                tracing::debug!(op = name, round, a_limbs = a.limbs().len(), b_limbs = b.limbs().len(), "ok");
                op.passed += 1;
            } else {
                println!("FAIL {name} round {round}: a = {a}, b = {b}");
                op.failed += 1;
            }
        }
        let status = if op.failed == 0 { "PASS" } else { "FAIL" };
        println!("{status} {name} ({}/{})", op.passed, rounds);
        report.ops.push(op);
    }

    tracing::info!(
        passed = report.total_passed(),
        failed = report.total_failed(),
        "verification finished"
    );
    report
}

pub fn verify_command(seed: u64, rounds: usize, max_limbs: usize) -> Result<()> {
    let report = run_verify(seed, rounds, max_limbs);
    println!(
        "{} passed, {} failed",
        report.total_passed(),
        report.total_failed()
    );
    if report.total_failed() > 0 {
        bail!("{} checks failed (seed {seed})", report.total_failed());
    }
    Ok(())
}
