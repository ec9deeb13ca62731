//! Benchmark profiles for blockvec.
//!
//! - [`reference_profile`]: 3D ratios over 1024 blocks
//! - [`stress_profile`]: 3D ratios over 65536 blocks
//! - [`ratio_pair`]: two deterministic equal-shape vectors for a profile

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use blockvec_multi::{BlockLayout, LayoutConfig, MultiIntVector};
use blockvec_test_utils::fixtures::ratio_blocks;

/// Shape of the vectors a benchmark operates on.
#[derive(Clone, Copy, Debug)]
pub struct BenchProfile {
    /// Components per block.
    pub dim: usize,
    /// Number of blocks.
    pub block_count: usize,
    /// Largest ratio component generated.
    pub max_ratio: i32,
}

/// 3D refinement ratios over 1024 blocks.
pub fn reference_profile() -> BenchProfile {
    BenchProfile {
        dim: 3,
        block_count: 1024,
        max_ratio: 4,
    }
}

/// 3D refinement ratios over 65536 blocks.
pub fn stress_profile() -> BenchProfile {
    BenchProfile {
        dim: 3,
        block_count: 65_536,
        max_ratio: 8,
    }
}

/// Layout sized for `profile`.
pub fn layout_for(profile: &BenchProfile) -> BlockLayout {
    BlockLayout::from_config(&LayoutConfig::new(profile.block_count))
        .expect("bench profiles have at least one block")
}

/// Two deterministic, equal-shape ratio vectors with positive components.
pub fn ratio_pair(profile: &BenchProfile) -> (MultiIntVector, MultiIntVector) {
    let layout = layout_for(profile);
    let a = MultiIntVector::from_blocks(
        &layout,
        ratio_blocks(profile.dim, profile.block_count, profile.max_ratio),
    );
    let b = MultiIntVector::from_blocks(
        &layout,
        ratio_blocks(profile.dim, profile.block_count, profile.max_ratio / 2),
    );
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_pair_is_compatible() {
        let (a, b) = ratio_pair(&reference_profile());
        assert!(a.check_compatible(&b).is_ok());
        assert_eq!(a.block_count(), 1024);
        assert!(b.min_component() >= 1);
    }
}
