//! Deterministic block fixtures.
//!
//! - [`ratio_blocks`]: refinement-ratio-like tuples in `1..=max_ratio`.
//! - [`mixed_sign_blocks`]: tuples spanning negative and positive values.
//!
//! Both are pure functions of their arguments so benches and tests see
//! identical inputs on every run.

use blockvec_core::IntVector;

fn scramble(i: u64, salt: u64) -> u64 {
    i.wrapping_add(salt)
        .wrapping_mul(6364136223846793007)
        .wrapping_add(1442695040888963407)
        >> 33
}

fn blocks_with(dim: usize, block_count: usize, f: impl Fn(u64) -> i32) -> Vec<IntVector> {
    (0..block_count)
        .map(|b| {
            let components: Vec<i32> = (0..dim).map(|k| f((b * dim + k) as u64)).collect();
            crate::iv(&components)
        })
        .collect()
}

/// `block_count` tuples of `dim` components, each in `1..=max_ratio`.
pub fn ratio_blocks(dim: usize, block_count: usize, max_ratio: i32) -> Vec<IntVector> {
    let span = max_ratio.max(1) as u64;
    blocks_with(dim, block_count, |i| (scramble(i, 17) % span) as i32 + 1)
}

/// `block_count` tuples of `dim` components, each in `-range..=range`.
pub fn mixed_sign_blocks(dim: usize, block_count: usize, range: i32) -> Vec<IntVector> {
    let span = 2 * range.max(0) as u64 + 1;
    blocks_with(dim, block_count, |i| (scramble(i, 91) % span) as i32 - range.max(0))
}
