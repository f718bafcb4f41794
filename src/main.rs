//! Micro-Idiom Benchmark Suite
//!
//! Runs every experiment once and prints the report to stdout.
//!
//! Run with: `cargo run --release`

use micro_idiom_bench::{run_suite, Experiment, SuiteConfig};
use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let report = run_suite(&SuiteConfig::default(), Experiment::all());
    print!("{report}");
}
