//! Benchmark runner: timed trials with resource samples around each one.

use matmul_bench::metrics;
use matmul_bench::{Operands, Result, run_trial};

/// Default operand dimension.
const N: usize = 500;
/// Untimed trials to warm caches and the CPU sampler's baseline.
const WARMUP_TRIALS: usize = 1;
/// Timed trials contributing to the average.
const MEASUREMENT_TRIALS: usize = 5;

fn main() {
    if let Err(err) = run() {
        eprintln!("benchmark failed: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    println!("=== Matrix Multiplication Benchmark ===\n");
    println!(
        "Matrix: {}×{}, warmup: {}, measurement: {}\n",
        N, N, WARMUP_TRIALS, MEASUREMENT_TRIALS
    );

    let mut sampler = metrics::detect();

    for _ in 0..WARMUP_TRIALS {
        let operands = Operands::generate(N, None)?;
        run_trial(&operands, sampler.as_mut())?;
    }

    let mut total_ms = 0.0;
    for trial in 1..=MEASUREMENT_TRIALS {
        let operands = Operands::generate(N, None)?;
        let report = run_trial(&operands, sampler.as_mut())?;

        let elapsed_ms = report.elapsed.as_secs_f64() * 1000.0;
        total_ms += elapsed_ms;

        println!("Trial {} ({:.2} ms)", trial, elapsed_ms);
        println!("{}", report);
        println!();
    }

    println!("{}", "-".repeat(50));
    println!(
        "Average: {:.2} ms over {} trials",
        total_ms / MEASUREMENT_TRIALS as f64,
        MEASUREMENT_TRIALS
    );
    Ok(())
}
