//! End-to-end checks of the harness contract and the workload scenarios.

use micro_idiom_bench::benchmark::workloads::{
    dispatch, fragmentation, matrix, summation, unrolling,
};
use micro_idiom_bench::payload::FastRng;
use micro_idiom_bench::{run, try_run, BenchError, Observable};

#[test]
fn summing_one_hundred_million_ones() {
    let data = vec![1_i32; 100_000_000];

    let result = run("sum_array", || summation::sum_array(&data)).unwrap();

    assert_eq!(result.observable, Observable::Signed(100_000_000));
    assert!(result.elapsed_secs >= 0.0);
}

#[test]
fn straight_and_unrolled_copies_match() {
    let src: Vec<i32> = (0..1_000_003).map(|i| i * 7 - 3).collect();
    let mut straight = vec![0; src.len()];
    let mut unrolled = vec![0; src.len()];

    try_run("copy_straight", || unrolling::copy_straight(&src, &mut straight).map(|()| 0_u64))
        .unwrap();
    try_run("copy_unrolled", || unrolling::copy_unrolled(&src, &mut unrolled).map(|()| 0_u64))
        .unwrap();

    assert_eq!(straight, src);
    assert_eq!(unrolled, straight);
}

#[test]
fn matrix_access_patterns_agree_on_the_total() {
    let grid = matrix::index_sum_grid(1_000, 1_000);

    let nested = try_run("nested", || matrix::sum_nested(&grid)).unwrap();
    let cached = try_run("cached", || matrix::sum_row_cached(&grid)).unwrap();

    assert_eq!(nested.observable, Observable::Signed(999_000_000));
    assert_eq!(cached.observable, nested.observable);
}

#[test]
fn dynamic_and_direct_dispatch_agree() {
    let derived = dispatch::Derived;
    let handle: &dyn dispatch::Valued = &derived;

    let dynamic = run("dynamic", || dispatch::accumulate_dynamic(handle, 10_000_000)).unwrap();
    let direct = run("direct", || dispatch::accumulate_direct(&derived, 10_000_000)).unwrap();

    assert_eq!(dynamic.observable, Observable::Signed(20_000_000));
    assert_eq!(direct.observable, dynamic.observable);
}

#[test]
fn harness_does_not_alter_the_work_unit_result() {
    let direct = summation::sum_array(&[3, 4, 5]);
    let timed = run("sum", || summation::sum_array(&[3, 4, 5])).unwrap();

    assert_eq!(timed.observable, Observable::from(direct));
}

#[test]
fn repeated_runs_with_reset_state_agree() {
    let src: Vec<i32> = (0..10_000).collect();
    let mut dst = vec![0; src.len()];

    let first = try_run("copy", || {
        unrolling::copy_unrolled(&src, &mut dst)?;
        Ok(unrolling::checksum(&dst))
    })
    .unwrap();

    dst.fill(0);

    let second = try_run("copy", || {
        unrolling::copy_unrolled(&src, &mut dst)?;
        Ok(unrolling::checksum(&dst))
    })
    .unwrap();

    assert_eq!(first.observable, second.observable);
}

#[test]
fn seeded_fragmentation_is_reproducible() {
    let run_once = || {
        let blocks = fragmentation::fragmented_blocks(10_000, 10, &mut FastRng::with_seed(42));
        fragmentation::checksum_blocks(&blocks)
    };

    let first = run("fragmented", run_once).unwrap();
    let second = run("fragmented", run_once).unwrap();

    assert_eq!(first.observable, second.observable);
}

#[test]
fn out_of_range_access_surfaces_as_an_error() {
    let grid = matrix::index_sum_grid(2, 2);

    let result = try_run("oob", || grid.get(2, 0));

    assert_eq!(
        result,
        Err(BenchError::IndexOutOfRange {
            row: 2,
            col: 0,
            rows: 2,
            cols: 2
        })
    );
}
