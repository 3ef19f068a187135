use anyhow::{anyhow, Context, Result};
use bignum::BigInteger;

fn parse_operand(text: &str) -> Result<BigInteger> {
    text.parse()
        .with_context(|| format!("invalid operand {text:?}"))
}

/// Evaluate `lhs op rhs` and print the result.
pub fn eval_expression(lhs: &str, op: &str, rhs: &str) -> Result<BigInteger> {
    let a = parse_operand(lhs)?;
    let b = parse_operand(rhs)?;
    let result = match op {
        "+" => a.add(&b),
        "-" => a.subtract(&b),
        "*" | "x" => a.multiply(&b),
        "/" => a.div(&b)?,
        "%" => a.rem(&b)?,
        "gcd" => a.gcd(&b),
        "lcm" => a.lcm(&b),
        "pow" => a.pow_big(&b)?,
        other => return Err(anyhow!("unknown operator {other:?}")),
    };
    println!("{result}");
    Ok(result)
}
