//! Allocation fragmentation workload.
//!
//! # Two Approaches Compared
//!
//! 1. **Fragmented**: every block is its own heap allocation, and after every
//!    `removal_interval` allocations a randomly chosen live block is freed.
//!    The freed holes scatter later allocations and the final walk hops
//!    between unrelated addresses.
//!
//! 2. **Contiguous**: all blocks live in one buffer allocated up front and
//!    are walked linearly.
//!
//! The removal pattern comes from a seeded [`FastRng`], so two runs with the
//! same seed free the same blocks.

use std::hint::black_box;

use rand::Rng;
use tracing::debug;

use crate::benchmark::runner::BenchmarkSession;
use crate::config::{SuiteConfig, BLOCK_SIZE};
use crate::payload::FastRng;

use super::log_speedup;

pub const FRAGMENTED: &str = "fragmented_blocks";
pub const CONTIGUOUS: &str = "contiguous_blocks";

/// One separately allocated block
pub type Block = Box<[u8; BLOCK_SIZE]>;

fn fill_byte(index: usize) -> u8 {
    (index % 251) as u8
}

/// Allocate `count` blocks, freeing a random live block every `removal_interval`
/// allocations. An interval of 0 disables removal.
pub fn fragmented_blocks(count: usize, removal_interval: usize, rng: &mut FastRng) -> Vec<Block> {
    let mut blocks: Vec<Block> = Vec::new();
    for i in 0..count {
        blocks.push(Box::new([fill_byte(i); BLOCK_SIZE]));

        if removal_interval > 0 && (i + 1) % removal_interval == 0 {
            let victim = rng.0.gen_range(0..blocks.len());
            drop(blocks.swap_remove(victim));
        }
    }
    blocks
}

/// Allocate `count` blocks back to back in a single buffer
pub fn contiguous_blocks(count: usize) -> Vec<u8> {
    let mut buffer = vec![0_u8; count * BLOCK_SIZE];
    for (i, block) in buffer.chunks_exact_mut(BLOCK_SIZE).enumerate() {
        block.fill(fill_byte(i));
    }
    buffer
}

/// Sum every byte of every block
pub fn checksum_blocks(blocks: &[Block]) -> u64 {
    blocks
        .iter()
        .flat_map(|block| block.iter())
        .map(|&b| u64::from(b))
        .sum()
}

/// Sum every byte of a contiguous buffer
pub fn checksum_bytes(bytes: &[u8]) -> u64 {
    bytes.iter().map(|&b| u64::from(b)).sum()
}

pub fn register(session: &mut BenchmarkSession, config: &SuiteConfig) {
    let count = config.fragment_blocks;
    let interval = config.fragment_removal_interval;
    let mut rng = FastRng::with_seed(config.fragment_seed);

    debug!(
        "Fragmenting {} blocks of {} bytes, removal every {} (seed {})",
        count, BLOCK_SIZE, interval, config.fragment_seed
    );

    session.bench(FRAGMENTED, || {
        let blocks = fragmented_blocks(count, interval, &mut rng);
        checksum_blocks(black_box(&blocks))
    });
    session.bench(CONTIGUOUS, || {
        let buffer = contiguous_blocks(count);
        checksum_bytes(black_box(&buffer))
    });

    log_speedup(session, CONTIGUOUS, FRAGMENTED);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_block_freed_per_interval() {
        let mut rng = FastRng::with_seed(1);
        let blocks = fragmented_blocks(105, 10, &mut rng);

        assert_eq!(blocks.len(), 105 - 10);
    }

    #[test]
    fn zero_interval_keeps_every_block() {
        let mut rng = FastRng::with_seed(1);
        let blocks = fragmented_blocks(20, 0, &mut rng);

        assert_eq!(blocks.len(), 20);
        assert_eq!(
            checksum_blocks(&blocks),
            checksum_bytes(&contiguous_blocks(20))
        );
    }

    #[test]
    fn same_seed_frees_the_same_blocks() {
        let first = fragmented_blocks(500, 10, &mut FastRng::with_seed(9));
        let second = fragmented_blocks(500, 10, &mut FastRng::with_seed(9));

        assert_eq!(checksum_blocks(&first), checksum_blocks(&second));
        assert_eq!(first, second);
    }

    #[test]
    fn contiguous_buffer_has_one_fill_byte_per_block() {
        let buffer = contiguous_blocks(3);

        assert_eq!(buffer.len(), 3 * BLOCK_SIZE);
        // Fill bytes 0, 1 and 2
        assert_eq!(checksum_bytes(&buffer), 3 * BLOCK_SIZE as u64);
    }
}
