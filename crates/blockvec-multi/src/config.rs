//! Layout configuration, validation, and error types.

use std::error::Error;
use std::fmt;

/// Configuration for a [`BlockLayout`](crate::BlockLayout).
///
/// Describes the domain decomposition that multi-block vectors are sized
/// against. Validated by [`BlockLayout::from_config`](crate::BlockLayout::from_config).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Number of blocks in the index space.
    ///
    /// Default: 1. Must be at least 1 and fit a [`BlockId`](blockvec_core::BlockId).
    pub block_count: usize,
}

impl LayoutConfig {
    /// Default block count: a single-block domain.
    pub const DEFAULT_BLOCK_COUNT: usize = 1;

    /// Largest block count addressable by a `BlockId`.
    pub const MAX_BLOCK_COUNT: usize = u32::MAX as usize;

    /// Create a config for `block_count` blocks.
    pub fn new(block_count: usize) -> Self {
        Self { block_count }
    }

    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_count == 0 {
            return Err(ConfigError::NoBlocks);
        }
        if self.block_count > Self::MAX_BLOCK_COUNT {
            return Err(ConfigError::BlockCountOverflow {
                value: self.block_count,
            });
        }
        Ok(())
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BLOCK_COUNT)
    }
}

/// Errors detected during [`LayoutConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Block count is zero.
    NoBlocks,
    /// Block count exceeds the `BlockId` range.
    BlockCountOverflow {
        /// The value that overflowed.
        value: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoBlocks => write!(f, "block_count must be at least 1"),
            Self::BlockCountOverflow { value } => {
                write!(f, "block count {value} exceeds u32::MAX")
            }
        }
    }
}

impl Error for ConfigError {}
