//! Virtual vs. direct dispatch workload.
//!
//! Both call sites target the same [`Derived`] instance: one through a
//! `&dyn Valued` handle, one through the concrete type.

use std::hint::black_box;

use crate::benchmark::runner::BenchmarkSession;
use crate::config::SuiteConfig;

use super::{check_agreement, log_speedup};

pub const DYNAMIC_DISPATCH: &str = "dynamic_dispatch";
pub const DIRECT_CALL: &str = "direct_call";

/// Capability invoked by the dispatch comparison
pub trait Valued {
    fn value(&self) -> i64 {
        1
    }
}

/// Keeps the provided `value`
#[derive(Debug, Default, Clone, Copy)]
pub struct Base;

impl Valued for Base {}

/// Overrides `value` to return 2
#[derive(Debug, Default, Clone, Copy)]
pub struct Derived;

impl Valued for Derived {
    fn value(&self) -> i64 {
        2
    }
}

/// Accumulate `calls` results through a trait object
pub fn accumulate_dynamic(handle: &dyn Valued, calls: u64) -> i64 {
    let mut acc: i64 = 0;
    for _ in 0..calls {
        acc += black_box(handle).value();
    }
    acc
}

/// Accumulate `calls` results through the concrete type
pub fn accumulate_direct(target: &Derived, calls: u64) -> i64 {
    let mut acc: i64 = 0;
    for _ in 0..calls {
        acc += black_box(target).value();
    }
    acc
}

pub fn register(session: &mut BenchmarkSession, config: &SuiteConfig) {
    let calls = config.dispatch_calls;
    let derived = Derived;
    let handle: &dyn Valued = &derived;

    session.bench(DYNAMIC_DISPATCH, || accumulate_dynamic(handle, calls));
    session.bench(DIRECT_CALL, || accumulate_direct(&derived, calls));

    log_speedup(session, DIRECT_CALL, DYNAMIC_DISPATCH);
    check_agreement(session, DIRECT_CALL, DYNAMIC_DISPATCH);
}
