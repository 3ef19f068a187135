use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bigcheck")]
#[command(about = "Cross-check bignum arithmetic against num-bigint", long_about = None)]
pub struct Cli {
    /// Log every checked case (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run randomized checks of every operation
    Verify {
        /// RNG seed, for reproducible runs
        #[arg(long, default_value_t = 0x5eed)]
        seed: u64,
        /// Cases per operation
        #[arg(long, default_value_t = 100)]
        rounds: usize,
        /// Maximum operand width in limbs
        #[arg(long, default_value_t = 80)]
        max_limbs: usize,
    },
    /// Compute base^exp and compare with the reference
    Pow {
        /// Decimal base
        #[arg(long, allow_hyphen_values = true)]
        base: String,
        /// Exponent
        #[arg(long)]
        exp: u64,
        /// Subtract one from the power (Mersenne-style numbers)
        #[arg(long)]
        minus_one: bool,
    },
    /// Evaluate `LHS OP RHS` on decimal operands
    Eval {
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// One of + - * / % gcd lcm pow
        op: String,
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },
}
