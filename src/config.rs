//! Configuration constants for the benchmark suite.
//!
//! Modify these values to adjust payload sizes and iteration counts.

/// Number of elements in the summation array (every element is 1)
pub const SUM_ARRAY_LEN: usize = 100_000_000;

/// Number of calls made by the inlined/non-inlined comparison
pub const INLINE_CALLS: u64 = 100_000_000;

/// Number of elements copied by the straight and unrolled copy loops
pub const COPY_LEN: usize = 10_000_000;

/// Number of short strings built per string-allocation variant
pub const SHORT_STRING_ITERATIONS: usize = 1_000_000;

/// Payload used for short-string construction (fits a 16-byte stack buffer)
pub const SHORT_STRING_PAYLOAD: &str = "short-string";

/// Number of calls made by the virtual/direct dispatch comparison
pub const DISPATCH_CALLS: u64 = 10_000_000;

/// Number of values fed through each arithmetic variant
pub const ARITHMETIC_ITERATIONS: u64 = 100_000_000;

/// Grid dimensions for the matrix access comparison
pub const GRID_ROWS: usize = 1_000;
pub const GRID_COLS: usize = 1_000;

/// Number of blocks allocated by the fragmentation comparison
pub const FRAGMENT_BLOCKS: usize = 1_000_000;

/// Size in bytes of each fragmentation block
pub const BLOCK_SIZE: usize = 64;

/// A random live block is released after every this many allocations
pub const FRAGMENT_REMOVAL_INTERVAL: usize = 10;

/// Fixed seed for the fragmentation removal pattern
pub const FRAGMENT_SEED: u64 = 42;

/// Payload sizes and iteration counts for one suite run.
///
/// `Default` uses the constants above. Tests use [`SuiteConfig::small`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteConfig {
    pub sum_array_len: usize,
    pub inline_calls: u64,
    pub copy_len: usize,
    pub short_string_iterations: usize,
    pub dispatch_calls: u64,
    pub arithmetic_iterations: u64,
    pub grid_rows: usize,
    pub grid_cols: usize,
    pub fragment_blocks: usize,
    pub fragment_removal_interval: usize,
    pub fragment_seed: u64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            sum_array_len: SUM_ARRAY_LEN,
            inline_calls: INLINE_CALLS,
            copy_len: COPY_LEN,
            short_string_iterations: SHORT_STRING_ITERATIONS,
            dispatch_calls: DISPATCH_CALLS,
            arithmetic_iterations: ARITHMETIC_ITERATIONS,
            grid_rows: GRID_ROWS,
            grid_cols: GRID_COLS,
            fragment_blocks: FRAGMENT_BLOCKS,
            fragment_removal_interval: FRAGMENT_REMOVAL_INTERVAL,
            fragment_seed: FRAGMENT_SEED,
        }
    }
}

impl SuiteConfig {
    /// A scaled-down configuration that runs the whole suite in milliseconds
    pub fn small() -> Self {
        Self {
            sum_array_len: 10_000,
            inline_calls: 10_000,
            copy_len: 1_003,
            short_string_iterations: 1_000,
            dispatch_calls: 10_000,
            arithmetic_iterations: 10_000,
            grid_rows: 32,
            grid_cols: 48,
            fragment_blocks: 1_000,
            ..Self::default()
        }
    }
}
