//! Test utilities for blockvec development.
//!
//! Provides a terse [`iv`] constructor, proptest strategies producing
//! per-block tuple sequences ([`arb_blocks`], [`arb_block_pair`]), and
//! deterministic block fixtures in [`fixtures`].
//!
//! Strategies yield `Vec<IntVector>` rather than multi-block vectors so
//! that unit tests inside `blockvec-multi` can wrap them with their own
//! crate's constructors.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::ops::Range;

use blockvec_core::IntVector;
use proptest::prelude::*;

/// Build an [`IntVector`] from a non-empty slice.
///
/// Panics on an empty slice; test-only convenience.
pub fn iv(components: &[i32]) -> IntVector {
    IntVector::from_slice(components).expect("iv() needs at least one component")
}

/// Strategy for a single tuple of `dim` components drawn from `values`.
pub fn arb_int_vector(dim: usize, values: Range<i32>) -> impl Strategy<Value = IntVector> {
    prop::collection::vec(values, dim).prop_map(|c| iv(&c))
}

/// Strategy for `block_count` tuples of `dim` components each.
pub fn arb_blocks(
    dim: usize,
    block_count: usize,
    values: Range<i32>,
) -> impl Strategy<Value = Vec<IntVector>> {
    prop::collection::vec(arb_int_vector(dim, values), block_count)
}

/// Strategy for two block sequences of identical shape.
pub fn arb_block_pair(
    dim: usize,
    block_count: usize,
    values: Range<i32>,
) -> impl Strategy<Value = (Vec<IntVector>, Vec<IntVector>)> {
    (
        arb_blocks(dim, block_count, values.clone()),
        arb_blocks(dim, block_count, values),
    )
}
