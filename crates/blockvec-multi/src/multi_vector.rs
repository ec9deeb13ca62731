//! The per-block integer vector store [`MultiIntVector`].

use std::ops::Index;

use blockvec_core::{BlockId, Dimension, IntVector};
use tracing::trace;

use crate::error::MultiVectorError;
use crate::layout::BlockLayout;

/// One [`IntVector`] per block of a multi-block index space.
///
/// Typical use is a per-block refinement ratio. Every block holds a tuple
/// of the same [`Dimension`]. Binary operations combine two vectors block
/// by block and require both to hold the same number of blocks with the
/// same dimension. Mixing shapes is a programming error and panics before
/// either operand is touched; use [`check_compatible`](Self::check_compatible)
/// to test shapes without panicking.
///
/// # Examples
///
/// ```
/// use blockvec_core::{BlockId, Dimension, IntVector};
/// use blockvec_multi::{BlockLayout, MultiIntVector};
///
/// let layout = BlockLayout::new(2);
/// let a = MultiIntVector::uniform(&layout, Dimension::TWO, 2);
/// let b = MultiIntVector::uniform(&layout, Dimension::TWO, 3);
///
/// let sum = &a + &b;
/// assert_eq!(sum.block_vector(BlockId(1)), &IntVector::from([5, 5]));
/// assert!(a.all_lt(&b));
///
/// let q = MultiIntVector::ceiling_quotient(&b, &a);
/// assert!(q.blocks().iter().all(|v| *v == IntVector::from([2, 2])));
/// ```
#[derive(Clone, Debug)]
pub struct MultiIntVector {
    pub(crate) blocks: Vec<IntVector>,
}

impl MultiIntVector {
    // ── Construction ───────────────────────────────────────────────

    /// Single-block vector holding `tuple`.
    ///
    /// Used when the final block count is not yet known.
    pub fn new(tuple: IntVector) -> Self {
        Self {
            blocks: vec![tuple],
        }
    }

    /// Vector holding `blocks` verbatim, block `i` at index `i`.
    ///
    /// Raises `layout`'s block count if `blocks` is longer.
    ///
    /// # Panics
    ///
    /// Panics if the blocks do not all share one dimension.
    pub fn from_blocks(layout: &BlockLayout, blocks: Vec<IntVector>) -> Self {
        if let Err(e) = check_uniform_dim(&blocks) {
            panic!("{e}");
        }
        layout.ratchet(blocks.len());
        Self { blocks }
    }

    /// One tuple of `dim` components, all equal to `value`, for every
    /// block of `layout`.
    ///
    /// # Panics
    ///
    /// Panics if `layout` records zero blocks.
    pub fn uniform(layout: &BlockLayout, dim: Dimension, value: i32) -> Self {
        let block_count = layout.block_count();
        assert!(block_count >= 1, "block layout has no blocks");
        Self {
            blocks: vec![IntVector::uniform(dim, value); block_count],
        }
    }

    /// `block_count` tuples of `dim` components, all equal to `value`.
    ///
    /// Raises `layout`'s block count if `block_count` is larger. A zero
    /// count yields an empty vector.
    pub fn filled(
        layout: &BlockLayout,
        dim: Dimension,
        value: i32,
        block_count: usize,
    ) -> Self {
        layout.ratchet(block_count);
        Self {
            blocks: vec![IntVector::uniform(dim, value); block_count],
        }
    }

    // ── Block store ────────────────────────────────────────────────

    /// Remove every block.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    /// Returns `true` if the vector holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Number of blocks held.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Replace the blocks with `blocks`, raising `layout`'s block count if
    /// `blocks` is longer.
    ///
    /// # Panics
    ///
    /// Panics if the blocks do not all share one dimension. The vector is
    /// left unchanged in that case.
    pub fn set(&mut self, layout: &BlockLayout, blocks: Vec<IntVector>) {
        if let Err(e) = check_uniform_dim(&blocks) {
            panic!("{e}");
        }
        self.blocks = blocks;
        layout.ratchet(self.blocks.len());
    }

    /// Resize to `layout`'s block count and store `tuple` in every block,
    /// discarding the previous contents.
    ///
    /// # Panics
    ///
    /// Panics if `layout` records zero blocks.
    pub fn set_all(&mut self, layout: &BlockLayout, tuple: &IntVector) {
        let block_count = layout.block_count();
        assert!(block_count >= 1, "block layout has no blocks");
        trace!(from = self.blocks.len(), to = block_count, "set_all resize");
        self.blocks.clear();
        self.blocks.resize(block_count, tuple.clone());
    }

    /// The tuple for `block`.
    ///
    /// # Panics
    ///
    /// Panics if `block` does not address one of this vector's blocks;
    /// that means the caller's domain decomposition disagrees with the
    /// vector. Use [`try_block_vector`](Self::try_block_vector) for block
    /// ids from untrusted input.
    pub fn block_vector(&self, block: BlockId) -> &IntVector {
        match self.try_block_vector(block) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }

    /// The tuple for `block`, or `BlockOutOfRange`.
    pub fn try_block_vector(&self, block: BlockId) -> Result<&IntVector, MultiVectorError> {
        self.blocks
            .get(block.index())
            .ok_or(MultiVectorError::BlockOutOfRange {
                block,
                block_count: self.blocks.len(),
            })
    }

    /// All blocks in block order.
    pub fn blocks(&self) -> &[IntVector] {
        &self.blocks
    }

    /// Iterate over `(BlockId, tuple)` pairs in block order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockId, &IntVector)> {
        (0..=u32::MAX).map(BlockId).zip(self.blocks.iter())
    }

    /// Dimension shared by every block.
    ///
    /// # Panics
    ///
    /// Panics on an empty vector.
    pub fn dim(&self) -> Dimension {
        match self.try_dim() {
            Ok(d) => d,
            Err(e) => panic!("{e}"),
        }
    }

    /// Dimension shared by every block, or `Empty`.
    pub fn try_dim(&self) -> Result<Dimension, MultiVectorError> {
        self.blocks
            .first()
            .map(IntVector::dim)
            .ok_or(MultiVectorError::Empty)
    }

    /// `true` if every block equals the all-ones tuple of dimension `dim`.
    pub fn is_one(&self, dim: Dimension) -> bool {
        let one = IntVector::one(dim);
        self.blocks.iter().all(|v| *v == one)
    }

    /// `true` if every block equals the all-zeros tuple of dimension `dim`.
    pub fn is_zero(&self, dim: Dimension) -> bool {
        let zero = IntVector::zero(dim);
        self.blocks.iter().all(|v| *v == zero)
    }

    // ── Shape checks ───────────────────────────────────────────────

    /// Check that `other` holds the same number of blocks with the same
    /// dimension. Two empty vectors are compatible.
    pub fn check_compatible(&self, other: &Self) -> Result<(), MultiVectorError> {
        if self.blocks.len() != other.blocks.len() {
            return Err(MultiVectorError::BlockCountMismatch {
                lhs: self.blocks.len(),
                rhs: other.blocks.len(),
            });
        }
        check_same_dim(self, other)
    }

    fn assert_populated(&self) {
        if self.blocks.is_empty() {
            panic!("{}", MultiVectorError::Empty);
        }
    }

    pub(crate) fn assert_compatible(&self, other: &Self) {
        if let Err(e) = self.check_compatible(other) {
            panic!("{e}");
        }
    }

    /// Apply `f` to each pair of corresponding blocks, after checking shape.
    ///
    /// A panic inside `f` leaves earlier blocks updated.
    pub(crate) fn zip_blocks(&mut self, rhs: &Self, f: impl Fn(&mut IntVector, &IntVector)) {
        self.assert_compatible(rhs);
        for (a, b) in self.blocks.iter_mut().zip(rhs.blocks.iter()) {
            f(a, b);
        }
    }

    fn all_blocks(&self, rhs: &Self, f: impl Fn(&IntVector, &IntVector) -> bool) -> bool {
        self.assert_compatible(rhs);
        self.blocks
            .iter()
            .zip(rhs.blocks.iter())
            .all(|(a, b)| f(a, b))
    }

    // ── Min / max / ceiling divide ─────────────────────────────────

    /// Replace every component with the smaller of `self` and `rhs`.
    pub fn min_with(&mut self, rhs: &Self) {
        self.zip_blocks(rhs, IntVector::min_with);
    }

    /// Replace every component with the larger of `self` and `rhs`.
    pub fn max_with(&mut self, rhs: &Self) {
        self.zip_blocks(rhs, IntVector::max_with);
    }

    /// Block-wise, component-wise minimum of `a` and `b`.
    pub fn min_of(a: &Self, b: &Self) -> Self {
        let mut out = a.clone();
        out.min_with(b);
        out
    }

    /// Block-wise, component-wise maximum of `a` and `b`.
    pub fn max_of(a: &Self, b: &Self) -> Self {
        let mut out = a.clone();
        out.max_with(b);
        out
    }

    /// Divide block-wise, rounding each component toward positive infinity.
    ///
    /// # Panics
    ///
    /// Panics before any change if the shapes differ. Panics if any
    /// component of `rhs` is zero; blocks before the offending one have
    /// already been divided by then.
    pub fn ceiling_divide(&mut self, rhs: &Self) {
        self.zip_blocks(rhs, IntVector::ceiling_divide);
    }

    /// Block-wise ceiling division of `numerator` by `denominator`.
    pub fn ceiling_quotient(numerator: &Self, denominator: &Self) -> Self {
        let mut out = numerator.clone();
        out.ceiling_divide(denominator);
        out
    }

    /// Smallest component across every block.
    ///
    /// # Panics
    ///
    /// Panics on an empty vector.
    pub fn min_component(&self) -> i32 {
        self.assert_populated();
        self.blocks
            .iter()
            .map(IntVector::min_component)
            .fold(i32::MAX, i32::min)
    }

    /// Largest component across every block.
    ///
    /// # Panics
    ///
    /// Panics on an empty vector.
    pub fn max_component(&self) -> i32 {
        self.assert_populated();
        self.blocks
            .iter()
            .map(IntVector::max_component)
            .fold(i32::MIN, i32::max)
    }

    // ── Comparison ─────────────────────────────────────────────────

    /// `true` if every block is component-wise strictly less than `rhs`.
    pub fn all_lt(&self, rhs: &Self) -> bool {
        self.all_blocks(rhs, IntVector::all_lt)
    }

    /// `true` if every block is component-wise less than or equal to `rhs`.
    pub fn all_le(&self, rhs: &Self) -> bool {
        self.all_blocks(rhs, IntVector::all_le)
    }

    /// `true` if every block is component-wise strictly greater than `rhs`.
    pub fn all_gt(&self, rhs: &Self) -> bool {
        self.all_blocks(rhs, IntVector::all_gt)
    }

    /// `true` if every block is component-wise greater than or equal to `rhs`.
    pub fn all_ge(&self, rhs: &Self) -> bool {
        self.all_blocks(rhs, IntVector::all_ge)
    }
}

/// Dimensions must agree whenever both sides hold at least one block.
fn check_same_dim(a: &MultiIntVector, b: &MultiIntVector) -> Result<(), MultiVectorError> {
    match (a.blocks.first(), b.blocks.first()) {
        (Some(x), Some(y)) => x.check_dim(y).map_err(MultiVectorError::from),
        _ => Ok(()),
    }
}

pub(crate) fn check_uniform_dim(blocks: &[IntVector]) -> Result<(), MultiVectorError> {
    if let Some((first, rest)) = blocks.split_first() {
        for block in rest {
            first.check_dim(block)?;
        }
    }
    Ok(())
}

/// Equal block counts and equal blocks.
///
/// # Panics
///
/// Panics if both vectors hold blocks of different dimensions.
impl PartialEq for MultiIntVector {
    fn eq(&self, other: &Self) -> bool {
        if let Err(e) = check_same_dim(self, other) {
            panic!("{e}");
        }
        self.blocks.len() == other.blocks.len() && self.blocks == other.blocks
    }
}

impl Eq for MultiIntVector {}

impl Index<BlockId> for MultiIntVector {
    type Output = IntVector;

    fn index(&self, block: BlockId) -> &IntVector {
        self.block_vector(block)
    }
}

impl From<IntVector> for MultiIntVector {
    fn from(tuple: IntVector) -> Self {
        Self::new(tuple)
    }
}
