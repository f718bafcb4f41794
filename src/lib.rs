//! # Micro-Idiom Benchmark Suite
//!
//! Times low-level performance idioms with a minimal harness: each work unit
//! runs once under a monotonic clock and returns an observable value that
//! keeps the measured loop alive.
//!
//! ## Modules
//!
//! - [`benchmark`]: The runner, session, results and workload definitions
//! - [`payload`]: Owned data structures the workloads measure
//! - [`metrics`]: Duration, count and rate formatting
//! - [`config`]: Configuration constants
//! - [`experiment`]: The fixed list of experiments
//! - [`suite`]: Sequential execution of experiments into a report

pub mod benchmark;
pub mod config;
pub mod error;
pub mod experiment;
pub mod metrics;
pub mod payload;
pub mod suite;

pub use benchmark::{run, try_run, BenchmarkReport, BenchmarkResult, BenchmarkSession, Observable};
pub use config::SuiteConfig;
pub use error::{BenchError, Result};
pub use experiment::Experiment;
pub use suite::run_suite;
