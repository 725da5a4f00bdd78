use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Loop-unroll factor of the pipelined multiply workload. Problem sizes must
/// divide evenly by it; the workloads do not handle remainders.
pub const UNROLL_FACTOR: usize = 4;

/// Stride values swept by the memory workload, in ascending order.
pub const STRIDES: [usize; 9] = [1, 2, 4, 8, 16, 32, 64, 128, 256];

/// Run parameters for the benchmark suite.
///
/// The defaults reproduce the canonical run: 50 million iterations for the
/// scalar workloads (a 200 MB `i32` buffer for the memory tests, far larger
/// than any cache), a 256-edge matrix for the cubic-cost multiply, and a
/// `results.csv` table in the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenchConfig {
    /// Iteration count for the scalar workloads and element count of the
    /// memory buffers.
    pub problem_size: usize,
    /// Edge length of the square matrices; the multiply is cubic in it.
    pub matrix_size: usize,
    /// How many elements ahead the prefetch workload hints. A tuning knob,
    /// not a correctness parameter.
    pub prefetch_distance: usize,
    /// Destination of the semicolon-delimited results table.
    pub output: PathBuf,
}

impl BenchConfig {
    pub const DEFAULT_PROBLEM_SIZE: usize = 50_000_000;
    pub const DEFAULT_MATRIX_SIZE: usize = 256;
    pub const DEFAULT_PREFETCH_DISTANCE: usize = 16;

    pub fn with_problem_size(mut self, problem_size: usize) -> Self {
        self.problem_size = problem_size;
        self
    }

    pub fn with_matrix_size(mut self, matrix_size: usize) -> Self {
        self.matrix_size = matrix_size;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    /// Checks the preconditions the workloads rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.problem_size == 0 {
            return Err(ConfigError::ZeroProblemSize);
        }
        if self.problem_size % UNROLL_FACTOR != 0 {
            return Err(ConfigError::UnalignedProblemSize(self.problem_size));
        }
        if self.matrix_size == 0 {
            return Err(ConfigError::ZeroMatrixSize);
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            problem_size: Self::DEFAULT_PROBLEM_SIZE,
            matrix_size: Self::DEFAULT_MATRIX_SIZE,
            prefetch_distance: Self::DEFAULT_PREFETCH_DISTANCE,
            output: PathBuf::from("results.csv"),
        }
    }
}

/// Rejected run parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("problem size must be positive")]
    ZeroProblemSize,
    #[error("problem size {0} is not a multiple of the unroll factor {UNROLL_FACTOR}")]
    UnalignedProblemSize(usize),
    #[error("matrix size must be positive")]
    ZeroMatrixSize,
}
