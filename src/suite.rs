//! The fixed benchmark sequence.
//!
//! Control flow is strictly linear: each workload runs to completion, its
//! sample is recorded, and its console line is written before the next
//! workload starts. There is no cancellation and no timeout; a large
//! problem size simply makes the run long.

use std::io::{self, Write};

use tracing::info;

use crate::config::{BenchConfig, STRIDES};
use crate::recorder::Recorder;
use crate::report;
use crate::workload::{self, Sample};

/// Runs every workload in the fixed order against `config`, recording into
/// `recorder` and writing the banner and per-result lines to `out`.
///
/// The binary passes a locked stdout here; tests pass a byte buffer.
pub fn run<W: Write>(config: &BenchConfig, recorder: &mut Recorder, out: &mut W) -> io::Result<()> {
    let n = config.problem_size;

    writeln!(out, "==============================")?;
    writeln!(out, "  CPU architecture benchmark")?;
    writeln!(out, "==============================")?;
    writeln!(out)?;

    info!(
        problem_size = n,
        matrix_size = config.matrix_size,
        "starting benchmark suite"
    );

    run_one(recorder, out, "ALU arithmetic", workload::arithmetic_chain(n))?;
    run_one(
        recorder,
        out,
        "Pipeline unroll x4",
        workload::unrolled_multiply(n),
    )?;
    run_one(
        recorder,
        out,
        "Branch predication",
        workload::branchy_accumulate(n),
    )?;

    writeln!(out)?;
    writeln!(out, "--- Memory stride sweep ---")?;
    for stride in STRIDES {
        run_one(
            recorder,
            out,
            format!("Memory stride={stride}"),
            workload::strided_sum(n, stride),
        )?;
    }

    run_one(
        recorder,
        out,
        "Prefetch",
        workload::prefetched_sum(n, config.prefetch_distance),
    )?;
    run_one(
        recorder,
        out,
        format!("Matrix {0}x{0}", config.matrix_size),
        workload::matrix_multiply(config.matrix_size),
    )?;
    run_one(
        recorder,
        out,
        "Dependency chain",
        workload::dependency_chain(n),
    )?;
    run_one(recorder, out, "Struct access", workload::struct_accumulate(n))?;
    run_one(
        recorder,
        out,
        "Independent chains",
        workload::independent_chains(n),
    )?;

    info!(results = recorder.len(), "benchmark suite finished");
    Ok(())
}

fn run_one<W: Write>(
    recorder: &mut Recorder,
    out: &mut W,
    label: impl Into<String>,
    sample: Sample,
) -> io::Result<()> {
    let m = recorder.record(label, sample);
    writeln!(out, "{}", report::format_result(m))
}
