//! Matrix access workload.
//!
//! Sums a row-major [`Grid`] two ways over the same buffer: resolving every
//! cell through the grid (row then column, each bounds-checked), and caching
//! a row slice once per row and walking it linearly.

use std::hint::black_box;

use crate::benchmark::runner::BenchmarkSession;
use crate::config::SuiteConfig;
use crate::error::Result;
use crate::payload::Grid;

use super::{check_agreement, log_speedup};

pub const NESTED_INDIRECTION: &str = "matrix_nested_indirection";
pub const ROW_CACHED: &str = "matrix_row_cached";

/// Grid where cell `(row, col)` holds `row + col`
pub fn index_sum_grid(rows: usize, cols: usize) -> Grid<i64> {
    Grid::from_fn(rows, cols, |row, col| (row + col) as i64)
}

/// Resolve every cell through the grid
pub fn sum_nested(grid: &Grid<i64>) -> Result<i64> {
    let mut sum = 0;
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            sum += grid.get(row, col)?;
        }
    }
    Ok(sum)
}

/// Fetch each row once, then walk it
pub fn sum_row_cached(grid: &Grid<i64>) -> Result<i64> {
    let mut sum = 0;
    for row in 0..grid.rows() {
        for &value in grid.row(row)? {
            sum += value;
        }
    }
    Ok(sum)
}

pub fn register(session: &mut BenchmarkSession, config: &SuiteConfig) {
    let grid = index_sum_grid(config.grid_rows, config.grid_cols);

    session.try_bench(NESTED_INDIRECTION, || sum_nested(black_box(&grid)));
    session.try_bench(ROW_CACHED, || sum_row_cached(black_box(&grid)));

    log_speedup(session, ROW_CACHED, NESTED_INDIRECTION);
    check_agreement(session, ROW_CACHED, NESTED_INDIRECTION);
}
