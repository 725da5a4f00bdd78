#[path = "common.rs"]
mod common;

use archbench::report::{self, CSV_HEADER, ReportError};
use common::run_small_suite;
use tempfile::TempDir;

#[test]
fn csv_round_trips_every_row() {
    let (recorder, _) = run_small_suite();
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("results.csv");

    report::write_csv(&path, recorder.measurements()).expect("write csv");

    let text = std::fs::read_to_string(&path).expect("read back csv");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(CSV_HEADER));

    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), recorder.len());

    for (row, m) in rows.iter().zip(recorder.measurements()) {
        let fields: Vec<&str> = row.split(';').collect();
        assert_eq!(fields.len(), 4, "row {row:?} must have four columns");
        assert_eq!(fields[0], m.label);

        let seconds: f64 = fields[1].parse().expect("elapsed column parses");
        let operations: f64 = fields[2].parse().expect("operations column parses");
        let mops: f64 = fields[3].parse().expect("throughput column parses");

        assert!(seconds > 0.0);
        assert!(operations > 0.0);
        // Full-precision round trip: parsing recovers the exact stored values
        // and the throughput stays consistent with the other two fields.
        assert_eq!(seconds, m.seconds);
        assert_eq!(operations, m.operations);
        assert_eq!(mops, m.throughput_mops());
        assert!((mops - operations / seconds / 1e6).abs() <= 1e-9 * mops.max(1.0));
    }
}

#[test]
fn numeric_columns_use_a_dot_decimal_separator() {
    let (recorder, _) = run_small_suite();
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("results.csv");

    report::write_csv(&path, recorder.measurements()).expect("write csv");

    let text = std::fs::read_to_string(&path).expect("read back csv");
    assert!(
        !text.contains(','),
        "comma found in output; numeric formatting must be locale-independent"
    );
}

#[test]
fn unwritable_output_is_reported_not_panicked() {
    let (recorder, _) = run_small_suite();
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("no-such-dir").join("results.csv");

    let err = report::write_csv(&path, recorder.measurements())
        .expect_err("writing into a missing directory must fail");
    match err {
        ReportError::Io { path: reported, .. } => assert_eq!(reported, path),
    }
}
