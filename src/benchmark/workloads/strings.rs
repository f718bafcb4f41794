//! Short-string buffer allocation workload.
//!
//! Builds the same short string many times three ways: a fresh heap
//! allocation per string, one heap buffer cleared and reused, and a
//! fixed-size stack buffer.

use std::hint::black_box;

use crate::benchmark::runner::BenchmarkSession;
use crate::config::{SuiteConfig, SHORT_STRING_PAYLOAD};
use crate::error::{BenchError, Result};

use super::{check_agreement, log_speedup};

pub const FRESH_ALLOCATION: &str = "short_string_fresh";
pub const REUSED_BUFFER: &str = "short_string_reused";
pub const STACK_BUFFER: &str = "short_string_stack";

/// Capacity of the stack buffer variant
pub const STACK_CAPACITY: usize = 16;

/// Allocate a new `String` for every iteration
pub fn fresh_allocations(payload: &str, iterations: usize) -> usize {
    let mut total = 0;
    for _ in 0..iterations {
        let s = black_box(payload).to_string();
        total += black_box(s).len();
    }
    total
}

/// Reuse one `String`, clearing it between iterations
pub fn reused_buffer(payload: &str, iterations: usize) -> usize {
    let mut total = 0;
    let mut buffer = String::with_capacity(payload.len());
    for _ in 0..iterations {
        buffer.clear();
        buffer.push_str(black_box(payload));
        total += black_box(&buffer).len();
    }
    total
}

/// Copy into a fixed stack buffer; fails when the payload does not fit
pub fn stack_buffer(payload: &str, iterations: usize) -> Result<usize> {
    let bytes = payload.as_bytes();
    if bytes.len() > STACK_CAPACITY {
        return Err(BenchError::PayloadTooLarge {
            len: bytes.len(),
            capacity: STACK_CAPACITY,
        });
    }

    let mut total = 0;
    let mut buffer = [0_u8; STACK_CAPACITY];
    for _ in 0..iterations {
        let len = bytes.len();
        buffer[..len].copy_from_slice(black_box(bytes));
        total += black_box(&buffer[..len]).len();
    }
    Ok(total)
}

pub fn register(session: &mut BenchmarkSession, config: &SuiteConfig) {
    let iterations = config.short_string_iterations;
    let payload = SHORT_STRING_PAYLOAD;

    session.bench(FRESH_ALLOCATION, || fresh_allocations(payload, iterations));
    session.bench(REUSED_BUFFER, || reused_buffer(payload, iterations));
    session.try_bench(STACK_BUFFER, || stack_buffer(payload, iterations));

    log_speedup(session, REUSED_BUFFER, FRESH_ALLOCATION);
    log_speedup(session, STACK_BUFFER, FRESH_ALLOCATION);
    check_agreement(session, REUSED_BUFFER, FRESH_ALLOCATION);
    check_agreement(session, STACK_BUFFER, FRESH_ALLOCATION);
}
