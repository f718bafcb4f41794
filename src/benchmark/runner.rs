//! Benchmark execution: the timed runner and the sequential session driving it.

use std::any::Any;
use std::hint::black_box;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use tracing::{debug, error, info};

use crate::benchmark::results::{BenchmarkOutcome, BenchmarkReport, BenchmarkResult, Observable};
use crate::error::{BenchError, Result};
use crate::metrics::format_duration;

/// Time an infallible work unit.
///
/// The work unit is invoked exactly once. Repetition belongs inside the work
/// unit itself.
pub fn run<T, F>(name: &str, work: F) -> Result<BenchmarkResult>
where
    F: FnOnce() -> T,
    T: Into<Observable>,
{
    try_run(name, || Ok(work()))
}

/// Time a fallible work unit.
///
/// An error from the work unit is returned as-is and no result is produced.
pub fn try_run<T, F>(name: &str, work: F) -> Result<BenchmarkResult>
where
    F: FnOnce() -> Result<T>,
    T: Into<Observable>,
{
    if name.trim().is_empty() {
        return Err(BenchError::EmptyName);
    }

    let start = Instant::now();
    // The output must exist before the end timestamp is taken
    let output = black_box(work());
    let elapsed = start.elapsed();

    let observable = output?.into();

    Ok(BenchmarkResult {
        name: name.to_string(),
        elapsed_secs: elapsed.as_secs_f64(),
        observable,
    })
}

/// Runs benchmarks one after another and collects their outcomes.
///
/// A benchmark that errors or panics is recorded as failed and the session
/// carries on with the next one.
#[derive(Debug, Default)]
pub struct BenchmarkSession {
    outcomes: Vec<BenchmarkOutcome>,
}

impl BenchmarkSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run an infallible work unit and record its outcome
    pub fn bench<T, F>(&mut self, name: &str, work: F) -> Option<&BenchmarkResult>
    where
        F: FnOnce() -> T,
        T: Into<Observable>,
    {
        self.try_bench(name, || Ok(work()))
    }

    /// Run a fallible work unit and record its outcome
    pub fn try_bench<T, F>(&mut self, name: &str, work: F) -> Option<&BenchmarkResult>
    where
        F: FnOnce() -> Result<T>,
        T: Into<Observable>,
    {
        debug!("Starting benchmark: {}", name);

        // Payloads are owned by the work unit or reset by the caller between
        // passes, so observing them after a panic is harmless.
        let attempt = panic::catch_unwind(AssertUnwindSafe(|| try_run(name, work)))
            .unwrap_or_else(|payload| Err(BenchError::Panicked(panic_message(payload.as_ref()))));

        let outcome = match attempt {
            Ok(result) => {
                info!(
                    "{}: {} (observable {})",
                    result.name,
                    format_duration(result.elapsed_secs),
                    result.observable
                );
                BenchmarkOutcome::Completed(result)
            }
            Err(e) => {
                error!("Benchmark {} failed: {}", name, e);
                BenchmarkOutcome::Failed {
                    name: name.to_string(),
                    error: e.to_string(),
                }
            }
        };

        self.outcomes.push(outcome);
        self.outcomes.last().and_then(BenchmarkOutcome::result)
    }

    pub fn outcomes(&self) -> &[BenchmarkOutcome] {
        &self.outcomes
    }

    /// Look up the most recent completed result with the given name
    pub fn result(&self, name: &str) -> Option<&BenchmarkResult> {
        self.outcomes
            .iter()
            .rev()
            .filter_map(BenchmarkOutcome::result)
            .find(|r| r.name == name)
    }

    /// Consume the session into a report
    pub fn finish(self) -> BenchmarkReport {
        BenchmarkReport::new(self.outcomes)
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_to(n: u64) -> u64 {
        (0..n).sum()
    }

    #[test]
    fn run_returns_the_work_unit_output() {
        let result = run("sum_to", || sum_to(1_000)).unwrap();

        assert_eq!(result.name, "sum_to");
        assert_eq!(result.observable, Observable::from(sum_to(1_000)));
        assert!(result.elapsed_secs >= 0.0);
    }

    #[test]
    fn zero_iterations_yield_identity_and_non_negative_time() {
        let result = run("empty", || sum_to(0)).unwrap();

        assert_eq!(result.observable, Observable::Unsigned(0));
        assert!(result.elapsed_secs >= 0.0);
    }

    #[test]
    fn empty_name_is_rejected_without_running_work() {
        let mut invoked = false;
        let result = run("  ", || {
            invoked = true;
            1_u64
        });

        assert_eq!(result, Err(BenchError::EmptyName));
        assert!(!invoked);
    }

    #[test]
    fn work_unit_errors_propagate() {
        let result = try_run::<u64, _>("fails", || {
            Err(BenchError::LengthMismatch {
                source_len: 1,
                dest_len: 2,
            })
        });

        assert_eq!(
            result,
            Err(BenchError::LengthMismatch {
                source_len: 1,
                dest_len: 2
            })
        );
    }

    #[test]
    fn elapsed_covers_the_work_unit() {
        let result = run("sleeps", || {
            std::thread::sleep(std::time::Duration::from_millis(20));
            sum_to(10)
        })
        .unwrap();

        assert!(result.elapsed_secs >= 0.020, "{}", result.elapsed_secs);
        assert_eq!(result.observable, Observable::Unsigned(45));
    }

    #[test]
    fn work_unit_runs_exactly_once() {
        let mut calls = 0_u64;
        run("once", || {
            calls += 1;
            calls
        })
        .unwrap();

        assert_eq!(calls, 1);
    }

    #[test]
    fn session_continues_after_error_and_panic() {
        let mut session = BenchmarkSession::new();

        session.bench("before", || 1_i64);
        session.try_bench::<i64, _>("errors", || {
            Err(BenchError::IndexOutOfRange {
                row: 5,
                col: 0,
                rows: 1,
                cols: 1,
            })
        });
        session.bench::<i64, _>("panics", || panic!("payload exploded"));
        session.bench("after", || 2_i64);

        let outcomes = session.outcomes();
        assert_eq!(outcomes.len(), 4);
        assert!(!outcomes[0].is_failure());
        assert!(outcomes[1].is_failure());
        assert!(outcomes[2].is_failure());
        assert!(outcomes[2].to_string().contains("payload exploded"));
        assert_eq!(
            session.result("after").unwrap().observable,
            Observable::Signed(2)
        );
    }

    #[test]
    fn session_report_keeps_order() {
        let mut session = BenchmarkSession::new();
        session.bench("a", || 1_u64);
        session.bench("b", || 2_u64);

        let report = session.finish();
        let names: Vec<_> = report.outcomes.iter().map(|o| o.name()).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
