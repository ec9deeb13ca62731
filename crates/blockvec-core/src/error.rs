//! Error types for the core value types.

use std::error::Error;
use std::fmt;

use crate::dimension::Dimension;

/// Errors arising from dimension construction, tuple shape checks, or
/// parsing the `(i0,...,in)` text form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A dimension of zero axes was requested.
    ZeroDimension,
    /// The requested dimension does not fit the dimension tag.
    DimensionTooLarge {
        /// The requested number of axes.
        value: usize,
        /// The largest supported number of axes.
        max: usize,
    },
    /// Two tuples with different dimensions met in one operation.
    DimensionMismatch {
        /// Dimension of the left-hand operand.
        lhs: Dimension,
        /// Dimension of the right-hand operand.
        rhs: Dimension,
    },
    /// Text could not be parsed as an integer tuple.
    Parse {
        /// The offending input, trimmed.
        input: String,
        /// What went wrong.
        reason: String,
    },
}

impl CoreError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            input: input.trim().to_owned(),
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "dimension must have at least one axis"),
            Self::DimensionTooLarge { value, max } => {
                write!(f, "dimension {value} exceeds maximum of {max}")
            }
            Self::DimensionMismatch { lhs, rhs } => {
                write!(f, "dimension mismatch: {lhs}D vs {rhs}D")
            }
            Self::Parse { input, reason } => {
                write!(f, "cannot parse integer vector from {input:?}: {reason}")
            }
        }
    }
}

impl Error for CoreError {}
