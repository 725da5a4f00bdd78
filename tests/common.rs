use archbench::config::BenchConfig;
use archbench::recorder::Recorder;
use archbench::suite;

/// Problem size for test runs: small enough to keep the suite fast, still a
/// multiple of the unroll factor and of every swept stride.
#[allow(dead_code)]
pub const TEST_SIZE: usize = 65_536;
#[allow(dead_code)]
pub const TEST_MATRIX_SIZE: usize = 16;

pub fn small_config() -> BenchConfig {
    BenchConfig::default()
        .with_problem_size(TEST_SIZE)
        .with_matrix_size(TEST_MATRIX_SIZE)
}

/// Runs the full fixed sequence against the small config, returning the
/// recorder and the captured console output.
pub fn run_small_suite() -> (Recorder, String) {
    let config = small_config();
    config.validate().expect("test config is valid");

    let mut recorder = Recorder::new();
    let mut console = Vec::new();
    suite::run(&config, &mut recorder, &mut console).expect("suite run succeeds");

    (
        recorder,
        String::from_utf8(console).expect("console output is UTF-8"),
    )
}
