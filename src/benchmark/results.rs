//! Benchmark results, outcomes and the end-of-run report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value returned by a work unit so the measured loop cannot be optimized away.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Observable {
    Signed(i64),
    Unsigned(u64),
    Address(usize),
}

impl fmt::Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Signed(v) => write!(f, "{v}"),
            Self::Unsigned(v) => write!(f, "{v}"),
            Self::Address(v) => write!(f, "{v:#x}"),
        }
    }
}

impl From<i64> for Observable {
    fn from(value: i64) -> Self {
        Self::Signed(value)
    }
}

impl From<u64> for Observable {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl From<usize> for Observable {
    fn from(value: usize) -> Self {
        Self::Unsigned(value as u64)
    }
}

impl<T> From<*const T> for Observable {
    fn from(ptr: *const T) -> Self {
        Self::Address(ptr as usize)
    }
}

/// A single timed run of a work unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub name: String,
    /// Monotonic elapsed time in seconds, never negative
    pub elapsed_secs: f64,
    pub observable: Observable,
}

impl BenchmarkResult {
    /// How many times faster this result ran than `other` (`> 1.0` means faster).
    ///
    /// Returns `None` when this result took no measurable time.
    pub fn speedup_over(&self, other: &BenchmarkResult) -> Option<f64> {
        if self.elapsed_secs > 0.0 {
            Some(other.elapsed_secs / self.elapsed_secs)
        } else {
            None
        }
    }
}

/// What happened to one benchmark in a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BenchmarkOutcome {
    Completed(BenchmarkResult),
    Failed { name: String, error: String },
}

impl BenchmarkOutcome {
    pub fn name(&self) -> &str {
        match self {
            Self::Completed(result) => &result.name,
            Self::Failed { name, .. } => name,
        }
    }

    pub fn result(&self) -> Option<&BenchmarkResult> {
        match self {
            Self::Completed(result) => Some(result),
            Self::Failed { .. } => None,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

impl fmt::Display for BenchmarkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed(result) => write!(
                f,
                "{}: {:.9} s (observable: {})",
                result.name, result.elapsed_secs, result.observable
            ),
            Self::Failed { name, error } => write!(f, "{name}: FAILED ({error})"),
        }
    }
}

/// Host information for context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub arch: String,
    pub cpu_cores: usize,
    pub crate_version: String,
}

impl Default for SystemInfo {
    fn default() -> Self {
        Self {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
            cpu_cores: std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(1),
            crate_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub timestamp: String,
    pub system_info: SystemInfo,
    pub outcomes: Vec<BenchmarkOutcome>,
}

impl BenchmarkReport {
    pub fn new(outcomes: Vec<BenchmarkOutcome>) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            system_info: SystemInfo::default(),
            outcomes,
        }
    }

    /// Look up a completed result by benchmark name
    pub fn result(&self, name: &str) -> Option<&BenchmarkResult> {
        self.outcomes
            .iter()
            .filter_map(BenchmarkOutcome::result)
            .find(|r| r.name == name)
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failure()).count()
    }

    /// Serialize the report as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Micro-idiom benchmarks @ {}", self.timestamp)?;
        writeln!(
            f,
            "Host: {} {} ({} cores), version {}",
            self.system_info.os,
            self.system_info.arch,
            self.system_info.cpu_cores,
            self.system_info.crate_version
        )?;
        for outcome in &self.outcomes {
            writeln!(f, "{outcome}")?;
        }
        Ok(())
    }
}
