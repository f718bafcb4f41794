//! Benchmark workload definitions.
//!
//! Each workload owns its payload, exposes the measured loops as plain
//! functions, and registers timed variants with a [`BenchmarkSession`].
//! Variants of one workload compute the same value, so their observables
//! double as a correctness check.

pub mod arithmetic;
pub mod dispatch;
pub mod fragmentation;
pub mod inlining;
pub mod matrix;
pub mod strings;
pub mod summation;
pub mod unrolling;

use tracing::{info, warn};

use crate::benchmark::runner::BenchmarkSession;
use crate::config::SuiteConfig;
use crate::experiment::Experiment;

/// Register every timed variant of `experiment` with the session
pub fn register_experiment(
    experiment: Experiment,
    session: &mut BenchmarkSession,
    config: &SuiteConfig,
) {
    match experiment {
        Experiment::Summation => summation::register(session, config),
        Experiment::Inlining => inlining::register(session, config),
        Experiment::Unrolling => unrolling::register(session, config),
        Experiment::ShortStrings => strings::register(session, config),
        Experiment::Dispatch => dispatch::register(session, config),
        Experiment::Arithmetic => arithmetic::register(session, config),
        Experiment::MatrixAccess => matrix::register(session, config),
        Experiment::Fragmentation => fragmentation::register(session, config),
    }
}

/// Log how much faster `candidate` ran than `baseline` when both completed
fn log_speedup(session: &BenchmarkSession, candidate: &str, baseline: &str) {
    let (Some(candidate), Some(baseline)) = (session.result(candidate), session.result(baseline))
    else {
        return;
    };

    if let Some(speedup) = candidate.speedup_over(baseline) {
        info!("{} vs {}: {:.2}x", candidate.name, baseline.name, speedup);
    }
}

/// Warn when two variants that compute the same value report different observables
fn check_agreement(session: &BenchmarkSession, candidate: &str, baseline: &str) {
    let (Some(candidate), Some(baseline)) = (session.result(candidate), session.result(baseline))
    else {
        return;
    };

    if candidate.observable != baseline.observable {
        warn!(
            "{} and {} disagree: {} != {}",
            candidate.name, baseline.name, candidate.observable, baseline.observable
        );
    }
}
