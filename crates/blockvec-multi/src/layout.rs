//! The block-count context that multi-block vectors are sized against.

use std::cell::Cell;

use blockvec_core::BlockId;
use tracing::debug;

use crate::config::{ConfigError, LayoutConfig};

/// Number of blocks in the domain decomposition.
///
/// A layout is configured once during domain setup and then passed by
/// reference to the [`MultiIntVector`](crate::MultiIntVector) constructors
/// that read it. Building a vector from more blocks than the layout
/// currently records raises the layout's count to match. The count only
/// ever grows this way; [`set_block_count`](Self::set_block_count) is the
/// one way to lower it.
///
/// Existing vectors are never resized when the count changes.
///
/// The count lives in a [`Cell`], so a layout is `Send` but not `Sync`:
/// it can be handed to another thread but never shared between threads.
///
/// # Examples
///
/// ```
/// use blockvec_core::IntVector;
/// use blockvec_multi::{BlockLayout, MultiIntVector};
///
/// let layout = BlockLayout::new(2);
/// let v = MultiIntVector::from_blocks(
///     &layout,
///     vec![IntVector::from([1, 1]), IntVector::from([2, 2]), IntVector::from([4, 4])],
/// );
/// assert_eq!(v.block_count(), 3);
/// assert_eq!(layout.block_count(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct BlockLayout {
    max_blocks: Cell<usize>,
}

impl BlockLayout {
    /// Create a layout recording `block_count` blocks.
    ///
    /// A zero count is accepted; [`MultiIntVector::set_all`](crate::MultiIntVector::set_all)
    /// and [`MultiIntVector::uniform`](crate::MultiIntVector::uniform) panic
    /// until it is raised.
    ///
    /// # Panics
    ///
    /// Panics if `block_count` exceeds [`LayoutConfig::MAX_BLOCK_COUNT`].
    /// Use [`from_config`](Self::from_config) for counts from outside the
    /// program.
    pub fn new(block_count: usize) -> Self {
        assert_addressable(block_count);
        Self {
            max_blocks: Cell::new(block_count),
        }
    }

    /// Create a layout from a validated config.
    pub fn from_config(config: &LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(block_count = config.block_count, "block layout configured");
        Ok(Self::new(config.block_count))
    }

    /// Number of blocks vectors built from this layout will hold.
    pub fn block_count(&self) -> usize {
        self.max_blocks.get()
    }

    /// Overwrite the block count.
    ///
    /// # Panics
    ///
    /// Panics if `block_count` exceeds [`LayoutConfig::MAX_BLOCK_COUNT`].
    pub fn set_block_count(&self, block_count: usize) {
        assert_addressable(block_count);
        debug!(
            from = self.max_blocks.get(),
            to = block_count,
            "block count set"
        );
        self.max_blocks.set(block_count);
    }

    /// Raise the block count to `len` if it is currently smaller.
    pub(crate) fn ratchet(&self, len: usize) {
        let current = self.max_blocks.get();
        if len > current {
            assert_addressable(len);
            debug!(from = current, to = len, "block count raised to fit vector");
            self.max_blocks.set(len);
        }
    }

    /// Identifiers of every block, in order.
    pub fn block_ids(&self) -> impl Iterator<Item = BlockId> {
        (0..=u32::MAX).take(self.block_count()).map(BlockId)
    }
}

/// Every block of a layout must be reachable through a `BlockId`.
fn assert_addressable(block_count: usize) {
    if block_count > LayoutConfig::MAX_BLOCK_COUNT {
        panic!("{}", ConfigError::BlockCountOverflow { value: block_count });
    }
}

impl Default for BlockLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::DEFAULT_BLOCK_COUNT)
    }
}
