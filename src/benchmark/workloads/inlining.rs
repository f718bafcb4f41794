//! Inlined vs. non-inlined call workload.
//!
//! `#[inline(always)]` and `#[inline(never)]` are hints the compiler honors
//! in practice but does not promise, so the gap measured here depends on the
//! toolchain and target. Both variants must still produce the same sum.

use std::hint::black_box;

use crate::benchmark::runner::BenchmarkSession;
use crate::config::SuiteConfig;

use super::{check_agreement, log_speedup};

pub const INLINED_CALLS: &str = "inlined_calls";
pub const OUTLINED_CALLS: &str = "outlined_calls";

#[inline(always)]
fn add_inlined(acc: u64, value: u64) -> u64 {
    acc.wrapping_add(value)
}

#[inline(never)]
fn add_outlined(acc: u64, value: u64) -> u64 {
    acc.wrapping_add(value)
}

/// Accumulate `0..calls` through an always-inlined helper
pub fn accumulate_inlined(calls: u64) -> u64 {
    let mut acc = 0;
    for i in 0..calls {
        acc = add_inlined(acc, black_box(i));
    }
    acc
}

/// Accumulate `0..calls` through a never-inlined helper
pub fn accumulate_outlined(calls: u64) -> u64 {
    let mut acc = 0;
    for i in 0..calls {
        acc = add_outlined(acc, black_box(i));
    }
    acc
}

pub fn register(session: &mut BenchmarkSession, config: &SuiteConfig) {
    let calls = config.inline_calls;

    session.bench(INLINED_CALLS, || accumulate_inlined(black_box(calls)));
    session.bench(OUTLINED_CALLS, || accumulate_outlined(black_box(calls)));

    log_speedup(session, INLINED_CALLS, OUTLINED_CALLS);
    check_agreement(session, INLINED_CALLS, OUTLINED_CALLS);
}
