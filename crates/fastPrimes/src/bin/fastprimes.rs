//! Compare sequential and parallel prime filtering over `[2, LIMIT + 1]`.

use anyhow::Result;
use clap::Parser;
use fastPrimes::prelude::*;
use fastPrimes::report::{timed, Preview, StrategyReport};
use log::info;
use std::io::{self, BufRead, Write};

/// Upper bound used when none is given.
const DEFAULT_LIMIT: i64 = 4_000_000;

/// Primes shown for the sequential run.
const SEQUENTIAL_PREVIEW: usize = 20;

/// Parallel primes below this bound are shown, sorted.
const PARALLEL_PREVIEW_BOUND: i64 = 80;

#[derive(Parser)]
#[command(name = "fastprimes")]
#[command(about = "Compare sequential and parallel prime filtering")]
#[command(version)]
struct Cli {
    /// Upper bound; candidates run from 2 to LIMIT + 1
    #[arg(default_value_t = DEFAULT_LIMIT, allow_negative_numbers = true)]
    limit: i64,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let candidates = candidates(cli.limit)?;
    info!("limit {}: {} candidates", cli.limit, candidates.len());

    let sequential = Primes::<i64>::new().adapter(Batch).parallel(false).build()?;
    let parallel = Primes::<i64>::new().adapter(Batch).parallel(true).build()?;

    let (sequential_result, sequential_elapsed) = timed(|| sequential.filter(&candidates));
    let sequential_result = sequential_result?;

    let (parallel_result, parallel_elapsed) = timed(|| parallel.filter(&candidates));
    let parallel_result = parallel_result?;
    info!("parallel run used {} workers", parallel_result.workers);

    println!(
        "{}",
        StrategyReport::new(
            "Sequential filter",
            &sequential_result,
            sequential_elapsed,
            Preview::Head(SEQUENTIAL_PREVIEW),
        )
    );
    println!(
        "{}",
        StrategyReport::new(
            "Parallel filter",
            &parallel_result,
            parallel_elapsed,
            Preview::SortedBelow(PARALLEL_PREVIEW_BOUND),
        )
    );

    println!("Press Enter to exit.");
    io::stdout().flush()?;

    // EOF counts as acknowledgement
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(())
}
