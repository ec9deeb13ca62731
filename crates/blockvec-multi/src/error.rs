//! Error types for multi-block vector operations.

use blockvec_core::{BlockId, CoreError, Dimension};
use std::fmt;

/// Errors arising from multi-block shape checks, block lookup, or text input.
///
/// Operators report the shape variants by panicking with their `Display`
/// text; the `try_*` accessors and the text readers return them.
#[derive(Debug)]
pub enum MultiVectorError {
    /// A block id does not address one of the vector's blocks.
    BlockOutOfRange {
        /// The offending block.
        block: BlockId,
        /// Number of blocks the vector holds.
        block_count: usize,
    },
    /// Two vectors hold different numbers of blocks.
    BlockCountMismatch {
        /// Blocks in the left-hand operand.
        lhs: usize,
        /// Blocks in the right-hand operand.
        rhs: usize,
    },
    /// Two vectors, or two blocks of one vector, have different dimensions.
    DimensionMismatch {
        /// Dimension of the left-hand operand (or first block).
        lhs: Dimension,
        /// Dimension of the right-hand operand (or offending block).
        rhs: Dimension,
    },
    /// The vector holds no blocks.
    Empty,
    /// A per-block tuple could not be parsed.
    Parse(CoreError),
    /// Reading or writing the text form failed.
    Io(std::io::Error),
}

impl fmt::Display for MultiVectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlockOutOfRange { block, block_count } => {
                write!(f, "block {block} out of range: vector has {block_count} blocks")
            }
            Self::BlockCountMismatch { lhs, rhs } => {
                write!(f, "block count mismatch: {lhs} vs {rhs}")
            }
            Self::DimensionMismatch { lhs, rhs } => {
                write!(f, "dimension mismatch: {lhs}D vs {rhs}D")
            }
            Self::Empty => write!(f, "multi-block vector has no blocks"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Io(e) => write!(f, "io: {e}"),
        }
    }
}

impl std::error::Error for MultiVectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoreError> for MultiVectorError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::DimensionMismatch { lhs, rhs } => Self::DimensionMismatch { lhs, rhs },
            other => Self::Parse(other),
        }
    }
}

impl From<std::io::Error> for MultiVectorError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
