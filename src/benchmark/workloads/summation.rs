//! Array summation workload.
//!
//! The baseline every other workload is read against: one linear pass over a
//! large `i32` array, accumulated into an `i64`.

use std::hint::black_box;

use tracing::info;

use crate::benchmark::runner::BenchmarkSession;
use crate::config::SuiteConfig;
use crate::metrics::{format_count, format_rate};

pub const SUM_ARRAY: &str = "sum_array";

/// Sum every element into a wide accumulator
pub fn sum_array(data: &[i32]) -> i64 {
    let mut sum: i64 = 0;
    for &value in data {
        sum += i64::from(value);
    }
    sum
}

pub fn register(session: &mut BenchmarkSession, config: &SuiteConfig) {
    info!("Summing {} elements", format_count(config.sum_array_len as u64));
    let data = vec![1_i32; config.sum_array_len];

    if let Some(result) = session.bench(SUM_ARRAY, || sum_array(black_box(&data))) {
        info!(
            "Summation throughput: {}",
            format_rate(config.sum_array_len as u64, result.elapsed_secs)
        );
    }
}
