use std::hint::black_box;

use crate::timer::Stopwatch;

use super::Sample;

/// Data-dependent add/subtract over an array of values 0..99.
///
/// Half the elements take each arm in a short repeating pattern, which is
/// exactly the shape where branch prediction (or predicated execution) makes
/// or breaks throughput. Records n operations.
pub fn branchy_accumulate(n: usize) -> Sample {
    let data = black_box((0..n).map(|i| (i % 100) as i32).collect::<Vec<_>>());
    let mut sum: i64 = 0;

    let sw = Stopwatch::start();
    for &value in &data {
        if value < 50 {
            sum += i64::from(value);
        } else {
            sum -= i64::from(value);
        }
    }
    let seconds = sw.elapsed_secs();

    black_box(sum);
    Sample {
        seconds,
        operations: n as f64,
    }
}
