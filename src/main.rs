use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use archbench::config::BenchConfig;
use archbench::recorder::Recorder;
use archbench::{report, suite};

#[derive(Parser, Debug)]
#[command(name = "archbench", about = "CPU architecture microbenchmark suite")]
struct Args {
    /// Iteration count for the scalar workloads and element count of the
    /// memory buffers.
    #[arg(long, default_value_t = BenchConfig::DEFAULT_PROBLEM_SIZE)]
    size: usize,

    /// Edge length of the square matrices in the matrix-multiply workload.
    #[arg(long, default_value_t = BenchConfig::DEFAULT_MATRIX_SIZE)]
    matrix_size: usize,

    /// Path of the semicolon-delimited results table.
    #[arg(long, default_value = "results.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    setup_tracing();
    let args = Args::parse();

    let config = BenchConfig::default()
        .with_problem_size(args.size)
        .with_matrix_size(args.matrix_size)
        .with_output(args.output);
    config.validate().context("invalid benchmark parameters")?;

    let mut recorder = Recorder::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    suite::run(&config, &mut recorder, &mut out).context("writing console report")?;

    report::write_csv(&config.output, recorder.measurements())
        .context("persisting benchmark results")?;
    writeln!(out, "\nResults saved to {}", config.output.display())?;
    writeln!(out, "\nAll tests completed.")?;

    Ok(())
}

fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
