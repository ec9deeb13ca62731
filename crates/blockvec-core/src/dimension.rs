//! The [`Dimension`] tag carried by every integer tuple.

use std::fmt;

use crate::error::CoreError;

/// Number of spatial axes of an index space.
///
/// Always at least one. Two tuples may only be combined when their
/// dimensions are equal.
///
/// # Examples
///
/// ```
/// use blockvec_core::Dimension;
///
/// let d = Dimension::new(3).unwrap();
/// assert_eq!(d.value(), 3);
/// assert!(Dimension::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dimension(u16);

impl Dimension {
    /// Largest supported number of axes.
    pub const MAX: usize = u16::MAX as usize;

    /// One-dimensional index space.
    pub const ONE: Self = Self(1);
    /// Two-dimensional index space.
    pub const TWO: Self = Self(2);
    /// Three-dimensional index space.
    pub const THREE: Self = Self(3);

    /// Create a dimension tag for `value` axes.
    ///
    /// Returns `Err(CoreError::ZeroDimension)` for zero and
    /// `Err(CoreError::DimensionTooLarge)` above [`Dimension::MAX`].
    pub fn new(value: usize) -> Result<Self, CoreError> {
        if value == 0 {
            return Err(CoreError::ZeroDimension);
        }
        if value > Self::MAX {
            return Err(CoreError::DimensionTooLarge {
                value,
                max: Self::MAX,
            });
        }
        Ok(Self(value as u16))
    }

    /// Tag for a length already known to be in `1..=MAX`.
    pub(crate) const fn from_len(len: usize) -> Self {
        debug_assert!(len >= 1 && len <= Self::MAX);
        Self(len as u16)
    }

    /// Number of axes.
    pub fn value(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for Dimension {
    type Error = CoreError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
