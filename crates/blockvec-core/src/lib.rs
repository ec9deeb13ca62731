//! Core value types for multi-block integer vectors.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the per-block building blocks used throughout the workspace: the
//! [`Dimension`] tag, the dimension-checked [`IntVector`] tuple, the
//! [`BlockId`] handle, and the [`CoreError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dimension;
pub mod error;
pub mod id;
pub mod int_vector;

pub use dimension::Dimension;
pub use error::CoreError;
pub use id::BlockId;
pub use int_vector::{ceiling_div, IntVector};
