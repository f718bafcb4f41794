//! Loop unrolling workload.
//!
//! Copies one buffer into another with a plain element loop and with a
//! hand-unrolled four-element body. The destination is rewritten before each
//! pass so both copies start from the same resident, identical buffer, and
//! only the copy itself is timed.

use std::hint::black_box;

use tracing::warn;

use crate::benchmark::runner::BenchmarkSession;
use crate::config::SuiteConfig;
use crate::error::{BenchError, Result};

use super::log_speedup;

pub const COPY_STRAIGHT: &str = "copy_straight";
pub const COPY_UNROLLED: &str = "copy_unrolled_x4";

/// Value every destination element holds when a timed copy starts
pub const DEST_FILL: i32 = -1;

/// Signature shared by the copy strategies
pub type CopyFn = fn(&[i32], &mut [i32]) -> Result<()>;

fn check_lengths(src: &[i32], dst: &[i32]) -> Result<()> {
    if src.len() != dst.len() {
        return Err(BenchError::LengthMismatch {
            source_len: src.len(),
            dest_len: dst.len(),
        });
    }
    Ok(())
}

/// Copy element by element
pub fn copy_straight(src: &[i32], dst: &mut [i32]) -> Result<()> {
    check_lengths(src, dst)?;
    for (d, s) in dst.iter_mut().zip(src) {
        *d = *s;
    }
    Ok(())
}

/// Copy four elements per iteration, then finish the remainder one at a time
pub fn copy_unrolled(src: &[i32], dst: &mut [i32]) -> Result<()> {
    check_lengths(src, dst)?;

    let mut dst_chunks = dst.chunks_exact_mut(4);
    let mut src_chunks = src.chunks_exact(4);
    for (d, s) in (&mut dst_chunks).zip(&mut src_chunks) {
        d[0] = s[0];
        d[1] = s[1];
        d[2] = s[2];
        d[3] = s[3];
    }
    for (d, s) in dst_chunks
        .into_remainder()
        .iter_mut()
        .zip(src_chunks.remainder())
    {
        *d = *s;
    }
    Ok(())
}

/// Overwrite the whole destination with [`DEST_FILL`]
pub fn reset_destination(dst: &mut [i32]) {
    dst.fill(black_box(DEST_FILL));
}

/// Order-sensitive checksum, so a misplaced element changes the result
pub fn checksum(data: &[i32]) -> i64 {
    data.iter()
        .enumerate()
        .fold(0_i64, |acc, (i, &v)| {
            acc.wrapping_add((i as i64 + 1).wrapping_mul(i64::from(v)))
        })
}

/// Time one copy strategy into a freshly reset destination.
///
/// Only the copy runs inside the timed region; its observable is the
/// destination address. The destination checksum is taken after the clock
/// stops and returned for comparison between strategies.
pub fn timed_copy(
    session: &mut BenchmarkSession,
    name: &str,
    src: &[i32],
    dst: &mut [i32],
    copy: CopyFn,
) -> Option<i64> {
    reset_destination(dst);

    session.try_bench(name, || {
        copy(black_box(src), &mut *dst)?;
        Ok(black_box(&*dst).as_ptr())
    })?;

    Some(checksum(dst))
}

pub fn register(session: &mut BenchmarkSession, config: &SuiteConfig) {
    let src: Vec<i32> = (0..config.copy_len).map(|i| (i % 1_000_003) as i32).collect();
    // Non-zero fill writes every page up front; a zeroed allocation would
    // leave the first timed pass to fault them in.
    let mut dst = vec![DEST_FILL; config.copy_len];

    let straight = timed_copy(session, COPY_STRAIGHT, &src, &mut dst, copy_straight);
    let unrolled = timed_copy(session, COPY_UNROLLED, &src, &mut dst, copy_unrolled);

    log_speedup(session, COPY_UNROLLED, COPY_STRAIGHT);
    if let (Some(straight), Some(unrolled)) = (straight, unrolled) {
        if straight != unrolled {
            warn!(
                "{} and {} produced different destinations: {} != {}",
                COPY_STRAIGHT, COPY_UNROLLED, straight, unrolled
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::benchmark::results::Observable;

    #[test]
    fn unrolled_copy_handles_every_remainder() {
        for len in 0..9 {
            let src: Vec<i32> = (1..=len).collect();
            let mut dst = vec![0; src.len()];

            copy_unrolled(&src, &mut dst).unwrap();
            assert_eq!(dst, src, "length {len}");
        }
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let src = [1, 2, 3];
        let mut dst = [0; 2];

        let expected = Err(BenchError::LengthMismatch {
            source_len: 3,
            dest_len: 2,
        });
        assert_eq!(copy_straight(&src, &mut dst), expected);
        assert_eq!(copy_unrolled(&src, &mut dst), expected);
        assert_eq!(dst, [0, 0]);
    }

    #[test]
    fn checksum_depends_on_order() {
        assert_ne!(checksum(&[1, 2]), checksum(&[2, 1]));
    }

    fn copy_from_reset_state(src: &[i32], dst: &mut [i32]) -> Result<()> {
        assert!(dst.iter().all(|&v| v == DEST_FILL), "destination not reset");
        copy_straight(src, dst)
    }

    #[test]
    fn every_timed_pass_starts_from_the_reset_destination() {
        let mut session = BenchmarkSession::new();
        let src: Vec<i32> = (0..1_003).collect();
        let mut dst = vec![7; src.len()];

        let first = timed_copy(&mut session, "first", &src, &mut dst, copy_from_reset_state);
        let second = timed_copy(&mut session, "second", &src, &mut dst, copy_from_reset_state);

        assert!(session.outcomes().iter().all(|o| !o.is_failure()));
        assert_eq!(first, second);
    }

    #[test]
    fn reset_leaves_the_same_state_as_a_fresh_destination() {
        let mut used: Vec<i32> = (0..100).collect();
        reset_destination(&mut used);

        assert_eq!(used, vec![DEST_FILL; 100]);
    }

    #[test]
    fn timed_copies_agree_and_keep_the_checksum_out_of_the_observable() {
        let mut session = BenchmarkSession::new();
        let src: Vec<i32> = (0..10_007).map(|i| i * 3 - 5).collect();
        let mut dst = vec![DEST_FILL; src.len()];

        let straight = timed_copy(&mut session, COPY_STRAIGHT, &src, &mut dst, copy_straight);
        let unrolled = timed_copy(&mut session, COPY_UNROLLED, &src, &mut dst, copy_unrolled);

        assert_eq!(straight, Some(checksum(&src)));
        assert_eq!(unrolled, straight);
        assert_eq!(
            session.result(COPY_UNROLLED).unwrap().observable,
            Observable::Address(dst.as_ptr() as usize)
        );
    }

    #[test]
    fn failed_copy_yields_no_checksum() {
        let mut session = BenchmarkSession::new();
        let src = [1, 2, 3];
        let mut dst = [0; 2];

        assert_eq!(timed_copy(&mut session, "short", &src, &mut dst, copy_unrolled), None);
        assert!(session.outcomes()[0].is_failure());
    }
}
