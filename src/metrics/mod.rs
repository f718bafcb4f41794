//! Human-readable formatting for benchmark measurements.

mod format;

pub use format::*;
