//! Console and file rendering of recorded measurements.
//!
//! Both outputs derive from the same [`Measurement`] fields and stay
//! re-computable from them. Numeric columns rely on Rust's float `Display`,
//! which always uses `.` as the decimal separator regardless of host locale
//! and prints the shortest representation that round-trips the exact value,
//! so the semicolon-delimited columns cannot be corrupted by locale-aware
//! formatting.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::recorder::Measurement;

/// Header row of the semicolon-delimited results table.
pub const CSV_HEADER: &str = "Test;Time(sec);Operations;Mops/s";

/// Errors surfaced when persisting the results table.
///
/// An unwritable output file is reportable, not fatal: the caller prints a
/// diagnostic and exits non-zero instead of losing the console output that
/// already happened.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write results to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One console line: label, elapsed seconds, and throughput in millions of
/// operations per second, both to three decimal places.
pub fn format_result(m: &Measurement) -> String {
    format!(
        "{}: {:.3} s, {:.3} Mops/s",
        m.label,
        m.seconds,
        m.throughput_mops()
    )
}

/// Writes the semicolon-delimited results table.
///
/// Rows appear in recording order. Elapsed seconds and operation counts are
/// written at full precision; the throughput column is computed with the
/// same formula as the console line.
pub fn write_csv(path: &Path, measurements: &[Measurement]) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{CSV_HEADER}").map_err(io_err)?;
    for m in measurements {
        writeln!(
            out,
            "{};{};{};{}",
            m.label,
            m.seconds,
            m.operations,
            m.throughput_mops()
        )
        .map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;

    Ok(())
}
