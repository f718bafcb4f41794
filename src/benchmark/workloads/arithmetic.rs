//! Arithmetic micro-variant workload.
//!
//! Evaluates the same expression in equivalent forms: doubling as multiply,
//! shift and add; remainder by a power of two as `%` and as a mask.

use std::hint::black_box;

use crate::benchmark::runner::BenchmarkSession;
use crate::config::SuiteConfig;

use super::{check_agreement, log_speedup};

pub const DOUBLE_MULTIPLY: &str = "double_by_multiply";
pub const DOUBLE_SHIFT: &str = "double_by_shift";
pub const DOUBLE_ADD: &str = "double_by_add";
pub const REMAINDER_MODULO: &str = "remainder_by_modulo";
pub const REMAINDER_MASK: &str = "remainder_by_mask";

/// Sum of `2 * i` for `i` in `0..n`, computed as `i * 2`
pub fn double_by_multiply(n: u64) -> u64 {
    (0..n).fold(0_u64, |acc, i| acc.wrapping_add(black_box(i).wrapping_mul(2)))
}

/// Sum of `2 * i` for `i` in `0..n`, computed as `i << 1`
pub fn double_by_shift(n: u64) -> u64 {
    (0..n).fold(0_u64, |acc, i| acc.wrapping_add(black_box(i) << 1))
}

/// Sum of `2 * i` for `i` in `0..n`, computed as `i + i`
pub fn double_by_add(n: u64) -> u64 {
    (0..n).fold(0_u64, |acc, i| {
        let i = black_box(i);
        acc.wrapping_add(i.wrapping_add(i))
    })
}

/// Sum of `i mod 8` for `i` in `0..n`, computed with `%`
pub fn remainder_by_modulo(n: u64) -> u64 {
    (0..n).fold(0_u64, |acc, i| acc + black_box(i) % 8)
}

/// Sum of `i mod 8` for `i` in `0..n`, computed with a bit mask
pub fn remainder_by_mask(n: u64) -> u64 {
    (0..n).fold(0_u64, |acc, i| acc + (black_box(i) & 7))
}

pub fn register(session: &mut BenchmarkSession, config: &SuiteConfig) {
    let n = config.arithmetic_iterations;

    session.bench(DOUBLE_MULTIPLY, || double_by_multiply(n));
    session.bench(DOUBLE_SHIFT, || double_by_shift(n));
    session.bench(DOUBLE_ADD, || double_by_add(n));
    session.bench(REMAINDER_MODULO, || remainder_by_modulo(n));
    session.bench(REMAINDER_MASK, || remainder_by_mask(n));

    for variant in [DOUBLE_SHIFT, DOUBLE_ADD] {
        log_speedup(session, variant, DOUBLE_MULTIPLY);
        check_agreement(session, variant, DOUBLE_MULTIPLY);
    }
    log_speedup(session, REMAINDER_MASK, REMAINDER_MODULO);
    check_agreement(session, REMAINDER_MASK, REMAINDER_MODULO);
}
