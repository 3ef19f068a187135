use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;

use args::{Cli, Commands};
use bigcheck::commands::{eval, pow, verify};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Verify {
            seed,
            rounds,
            max_limbs,
        } => verify::verify_command(*seed, *rounds, *max_limbs),
        Commands::Pow {
            base,
            exp,
            minus_one,
        } => pow::pow_command(base, *exp, *minus_one).map(|_| ()),
        Commands::Eval { lhs, op, rhs } => eval::eval_expression(lhs, op, rhs).map(|_| ()),
    }
}
