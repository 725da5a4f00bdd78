use serde::Serialize;

use crate::workload::Sample;

/// One recorded benchmark outcome. Immutable after creation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Measurement {
    pub label: String,
    /// Measured wall-clock seconds; always positive and finite.
    pub seconds: f64,
    /// Statically defined operation count for the workload, never measured.
    pub operations: f64,
}

impl Measurement {
    /// Throughput in millions of operations per second.
    pub fn throughput_mops(&self) -> f64 {
        self.operations / self.seconds / 1e6
    }
}

/// Append-only, arrival-ordered collection of measurements.
///
/// Owned by the driver and threaded through the run; workloads stay pure and
/// return [`Sample`]s instead of touching shared state.
#[derive(Debug, Default)]
pub struct Recorder {
    entries: Vec<Measurement>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a measurement and returns a reference to it.
    ///
    /// A zero or negative duration means the clock failed mid-run; that is a
    /// measurement failure, not a result, so it aborts instead of recording
    /// garbage.
    pub fn record(&mut self, label: impl Into<String>, sample: Sample) -> &Measurement {
        let label = label.into();
        assert!(
            sample.seconds.is_finite() && sample.seconds > 0.0,
            "measurement failure: elapsed time {}s for {label}",
            sample.seconds
        );

        let index = self.entries.len();
        self.entries.push(Measurement {
            label,
            seconds: sample.seconds,
            operations: sample.operations,
        });
        &self.entries[index]
    }

    /// All measurements, in recording order.
    pub fn measurements(&self) -> &[Measurement] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
