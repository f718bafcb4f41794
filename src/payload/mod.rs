//! Payload types owned by the benchmark workloads.
//!
//! Each workload builds its own payload before timing starts; nothing here
//! is shared between workloads.

mod grid;
mod rng;

pub use grid::*;
pub use rng::*;
