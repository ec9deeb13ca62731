//! Multi-block integer vectors.
//!
//! This crate defines [`MultiIntVector`], one [`IntVector`](blockvec_core::IntVector)
//! per block of a multi-block index space, together with the
//! [`BlockLayout`] context that records how many blocks the domain has.
//!
//! # Shape contract
//!
//! Every binary operation (arithmetic, min/max, ceiling divide,
//! comparison) requires both operands to hold the same number of blocks
//! with the same dimension. A mismatch is a programming error and panics
//! before any operand is modified. Inputs from outside the program go
//! through the fallible entry points instead:
//! [`MultiIntVector::try_block_vector`], [`MultiIntVector::check_compatible`],
//! [`FromStr`](std::str::FromStr) and [`MultiIntVector::read_from`].
//!
//! # Block count
//!
//! A [`BlockLayout`] is configured once during domain setup (from a
//! [`LayoutConfig`]) and passed to the constructors that size vectors from
//! it. Building a vector from a longer block sequence raises the layout's
//! count; the count never shrinks on its own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod io;
pub mod layout;
pub mod multi_vector;
pub mod ops;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::{ConfigError, LayoutConfig};
pub use error::MultiVectorError;
pub use layout::BlockLayout;
pub use multi_vector::MultiIntVector;
