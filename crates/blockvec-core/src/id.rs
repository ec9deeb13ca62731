//! Strongly-typed block identifier.

use std::fmt;

/// Identifies one block of a multi-block index space.
///
/// Blocks are numbered sequentially from zero; `BlockId(n)` addresses the
/// n-th per-block entry of a multi-block vector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u32);

impl BlockId {
    /// Sentinel that never addresses a real block.
    pub const INVALID: Self = Self(u32::MAX);

    /// Create an identifier for block `value`.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Zero-based index of this block.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns `false` for [`BlockId::INVALID`].
    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for BlockId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
