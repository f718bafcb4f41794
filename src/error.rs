//! Error types for the benchmark harness and its payloads.

use thiserror::Error;

/// Errors a benchmark or its payload can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    /// A benchmark was requested without a usable name.
    #[error("benchmark name must not be empty")]
    EmptyName,

    /// A grid cell was addressed outside the grid bounds.
    #[error("index ({row}, {col}) out of range for {rows}x{cols} grid")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Source and destination buffers of a copy differ in length.
    #[error("length mismatch: source has {source_len} elements, destination has {dest_len}")]
    LengthMismatch { source_len: usize, dest_len: usize },

    /// A payload does not fit the fixed-capacity buffer it is copied into.
    #[error("payload of {len} bytes exceeds buffer capacity of {capacity}")]
    PayloadTooLarge { len: usize, capacity: usize },

    /// The work unit panicked; carries the panic message when one was available.
    #[error("work unit panicked: {0}")]
    Panicked(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BenchError>;
