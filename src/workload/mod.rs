//! The nine timing loops, one per architecturally distinct access pattern.
//!
//! Each workload is a pure function from a problem size (plus a stride or
//! look-ahead distance where relevant) to a [`Sample`]: measured wall time
//! and the statically defined operation count for that test. Counts come
//! from the formulas documented on each function, never from measurement.
//!
//! Every loop routes its accumulator or output buffer through
//! [`std::hint::black_box`], and input buffers are made opaque the same way,
//! so an optimizing compiler can neither eliminate the loop nor fold it into
//! a closed form. A dead-code-eliminated loop would silently report
//! near-zero timings, which is a correctness failure for a benchmark.

mod alu;
mod branch;
mod matrix;
mod memory;
mod pipeline;

pub use alu::{arithmetic_chain, dependency_chain, independent_chains};
pub use branch::branchy_accumulate;
pub use matrix::matrix_multiply;
pub use memory::{prefetched_sum, strided_sum, struct_accumulate};
pub use pipeline::unrolled_multiply;

/// Outcome of one workload run: measured wall time plus the statically
/// defined operation count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub seconds: f64,
    pub operations: f64,
}
