//! blockvec: per-block integer vectors for multi-block index spaces.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the blockvec sub-crates. For most users, adding `blockvec` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use blockvec::prelude::*;
//!
//! // Domain setup: three blocks.
//! let layout = BlockLayout::from_config(&LayoutConfig::new(3)).unwrap();
//!
//! // A 2:1 refinement ratio everywhere, then refine block 2 further.
//! let mut ratio = MultiIntVector::uniform(&layout, Dimension::THREE, 2);
//! ratio.set(
//!     &layout,
//!     vec![
//!         IntVector::from([2, 2, 2]),
//!         IntVector::from([2, 2, 2]),
//!         IntVector::from([4, 4, 2]),
//!     ],
//! );
//!
//! let coarse = MultiIntVector::uniform(&layout, Dimension::THREE, 9);
//! let fine = &coarse * &ratio;
//! assert_eq!(fine[BlockId(2)], IntVector::from([36, 36, 18]));
//!
//! // Back to the coarse index space, rounding up.
//! let back = MultiIntVector::ceiling_quotient(&fine, &ratio);
//! assert_eq!(back, coarse);
//! assert_eq!(ratio.max_component(), 4);
//! assert_eq!(ratio.to_string(), "(2,2,2) (2,2,2) (4,4,2)");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `blockvec-core` | `Dimension`, `IntVector`, `BlockId`, `CoreError` |
//! | [`multi`] | `blockvec-multi` | `BlockLayout`, `LayoutConfig`, `MultiIntVector` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`blockvec-core`).
///
/// The per-block [`types::IntVector`], its [`types::Dimension`] tag and the
/// [`types::BlockId`] handle.
pub use blockvec_core as types;

/// Multi-block vectors and the block layout (`blockvec-multi`).
///
/// Provides [`multi::MultiIntVector`], [`multi::BlockLayout`] and
/// [`multi::LayoutConfig`].
pub use blockvec_multi as multi;

/// Common imports for typical blockvec usage.
///
/// ```rust
/// use blockvec::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use blockvec_core::{BlockId, Dimension, IntVector};

    // Multi-block vectors
    pub use blockvec_multi::{BlockLayout, LayoutConfig, MultiIntVector};

    // Errors
    pub use blockvec_core::CoreError;
    pub use blockvec_multi::{ConfigError, MultiVectorError};
}
