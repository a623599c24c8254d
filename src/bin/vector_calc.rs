//! Euclidean Vector Calculator
//!
//! Evaluates a single vector operation given on the command line and prints
//! the result.
//!
//! Usage:
//!   cargo run --bin vector_calc -- [-v...] <COMMAND> <VECTORS>...
//!
//! Examples:
//!   cargo run --bin vector_calc -- cross 1,4,0 -2,5,3
//!   cargo run --bin vector_calc -- add 1,0 0,1 1,1

use anyhow::Context;
use clap::Parser;
use gridvec::cli::{evaluate, setup_logging, Args};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    log::info!("Evaluating `{}`", args.command.name());
    log::debug!("Arguments: {:?}", args.command);

    let output = evaluate(&args.command)
        .with_context(|| format!("Failed to evaluate `{}`", args.command.name()))?;

    println!("{}", output);
    Ok(())
}
