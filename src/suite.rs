//! Runs experiments in sequence and assembles the report.

use tracing::info;

use crate::benchmark::results::BenchmarkReport;
use crate::benchmark::runner::BenchmarkSession;
use crate::benchmark::workloads::register_experiment;
use crate::config::SuiteConfig;
use crate::experiment::Experiment;

/// Run `experiments` in order with one shared session.
///
/// Each experiment builds its own payload. Failures are recorded in the
/// report and never stop the remaining experiments.
pub fn run_suite(config: &SuiteConfig, experiments: &[Experiment]) -> BenchmarkReport {
    let mut session = BenchmarkSession::new();

    for experiment in experiments {
        info!("Running {}: {}", experiment.name(), experiment.description());
        register_experiment(*experiment, &mut session, config);
    }

    let report = session.finish();
    info!(
        "Suite complete: {} benchmarks, {} failed",
        report.outcomes.len(),
        report.failure_count()
    );
    report
}
