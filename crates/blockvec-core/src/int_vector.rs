//! The dimension-tagged integer tuple [`IntVector`].

use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};
use std::str::FromStr;

use smallvec::SmallVec;

use crate::dimension::Dimension;
use crate::error::CoreError;

/// A fixed-length tuple of signed integers, one per axis.
///
/// Uses `SmallVec<[i32; 4]>` so tuples up to four dimensions never touch
/// the heap. The length is fixed at construction and is always at least
/// one.
///
/// Binary operations are component-wise and require both operands to have
/// the same [`Dimension`]; combining tuples of different dimensions is a
/// programming error and panics.
///
/// # Examples
///
/// ```
/// use blockvec_core::{Dimension, IntVector};
///
/// let a = IntVector::from([4, 6]);
/// let b = IntVector::uniform(Dimension::TWO, 2);
/// assert_eq!(&a / &b, IntVector::from([2, 3]));
/// assert!(b.all_lt(&a));
/// assert_eq!(a.to_string(), "(4,6)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IntVector {
    components: SmallVec<[i32; 4]>,
}

impl IntVector {
    /// Create a tuple from a slice of components.
    ///
    /// Returns `Err(CoreError::ZeroDimension)` for an empty slice.
    pub fn from_slice(components: &[i32]) -> Result<Self, CoreError> {
        Dimension::new(components.len())?;
        Ok(Self {
            components: SmallVec::from_slice(components),
        })
    }

    /// Tuple of dimension `dim` with every component equal to `value`.
    pub fn uniform(dim: Dimension, value: i32) -> Self {
        Self {
            components: SmallVec::from_elem(value, dim.value()),
        }
    }

    /// The canonical all-zeros tuple.
    pub fn zero(dim: Dimension) -> Self {
        Self::uniform(dim, 0)
    }

    /// The canonical all-ones tuple.
    pub fn one(dim: Dimension) -> Self {
        Self::uniform(dim, 1)
    }

    /// Number of axes.
    pub fn dim(&self) -> Dimension {
        Dimension::from_len(self.components.len())
    }

    /// Components in axis order.
    pub fn as_slice(&self) -> &[i32] {
        &self.components
    }

    /// Iterate over the components in axis order.
    pub fn iter(&self) -> std::slice::Iter<'_, i32> {
        self.components.iter()
    }

    /// Check that `other` has the same dimension as `self`.
    pub fn check_dim(&self, other: &Self) -> Result<(), CoreError> {
        if self.components.len() != other.components.len() {
            return Err(CoreError::DimensionMismatch {
                lhs: self.dim(),
                rhs: other.dim(),
            });
        }
        Ok(())
    }

    fn assert_same_dim(&self, other: &Self) {
        if let Err(e) = self.check_dim(other) {
            panic!("{e}");
        }
    }

    fn zip_apply(&mut self, rhs: &Self, f: impl Fn(i32, i32) -> i32) {
        self.assert_same_dim(rhs);
        for (a, &b) in self.components.iter_mut().zip(rhs.components.iter()) {
            *a = f(*a, b);
        }
    }

    fn all_pairs(&self, rhs: &Self, f: impl Fn(i32, i32) -> bool) -> bool {
        self.assert_same_dim(rhs);
        self.components
            .iter()
            .zip(rhs.components.iter())
            .all(|(&a, &b)| f(a, b))
    }

    /// Replace each component with the smaller of `self` and `rhs`.
    pub fn min_with(&mut self, rhs: &Self) {
        self.zip_apply(rhs, i32::min);
    }

    /// Replace each component with the larger of `self` and `rhs`.
    pub fn max_with(&mut self, rhs: &Self) {
        self.zip_apply(rhs, i32::max);
    }

    /// Divide component-wise, rounding toward positive infinity.
    ///
    /// # Panics
    ///
    /// Panics on a dimension mismatch before any change. Panics on a zero
    /// component of `rhs`, or on `i32::MIN / -1`, after earlier components
    /// have been divided.
    pub fn ceiling_divide(&mut self, rhs: &Self) {
        self.zip_apply(rhs, ceiling_div);
    }

    /// Component-wise ceiling division of `numerator` by `denominator`.
    pub fn ceiling_quotient(numerator: &Self, denominator: &Self) -> Self {
        let mut out = numerator.clone();
        out.ceiling_divide(denominator);
        out
    }

    /// `true` if every component is strictly less than the one in `rhs`.
    pub fn all_lt(&self, rhs: &Self) -> bool {
        self.all_pairs(rhs, |a, b| a < b)
    }

    /// `true` if every component is less than or equal to the one in `rhs`.
    pub fn all_le(&self, rhs: &Self) -> bool {
        self.all_pairs(rhs, |a, b| a <= b)
    }

    /// `true` if every component is strictly greater than the one in `rhs`.
    pub fn all_gt(&self, rhs: &Self) -> bool {
        self.all_pairs(rhs, |a, b| a > b)
    }

    /// `true` if every component is greater than or equal to the one in `rhs`.
    pub fn all_ge(&self, rhs: &Self) -> bool {
        self.all_pairs(rhs, |a, b| a >= b)
    }

    /// Smallest component.
    pub fn min_component(&self) -> i32 {
        self.components.iter().copied().fold(i32::MAX, i32::min)
    }

    /// Largest component.
    pub fn max_component(&self) -> i32 {
        self.components.iter().copied().fold(i32::MIN, i32::max)
    }

    /// Product of all components, widened to avoid overflow for
    /// realistic index-space extents.
    pub fn product(&self) -> i64 {
        self.components.iter().map(|&c| c as i64).product()
    }
}

/// Integer division rounded toward positive infinity.
///
/// Panics if `denominator` is zero or the quotient overflows
/// (`i32::MIN / -1`).
pub fn ceiling_div(numerator: i32, denominator: i32) -> i32 {
    let q = numerator / denominator;
    let r = numerator % denominator;
    if r != 0 && ((r > 0) == (denominator > 0)) {
        q + 1
    } else {
        q
    }
}

impl<const N: usize> From<[i32; N]> for IntVector {
    fn from(components: [i32; N]) -> Self {
        const {
            assert!(N > 0, "an IntVector needs at least one component");
            assert!(N <= Dimension::MAX, "too many components for a Dimension");
        };
        Self {
            components: SmallVec::from_slice(&components),
        }
    }
}

impl TryFrom<Vec<i32>> for IntVector {
    type Error = CoreError;

    fn try_from(components: Vec<i32>) -> Result<Self, Self::Error> {
        Dimension::new(components.len())?;
        Ok(Self {
            components: SmallVec::from_vec(components),
        })
    }
}

impl TryFrom<&[i32]> for IntVector {
    type Error = CoreError;

    fn try_from(components: &[i32]) -> Result<Self, Self::Error> {
        Self::from_slice(components)
    }
}

impl Index<usize> for IntVector {
    type Output = i32;

    fn index(&self, axis: usize) -> &i32 {
        &self.components[axis]
    }
}

impl IndexMut<usize> for IntVector {
    fn index_mut(&mut self, axis: usize) -> &mut i32 {
        &mut self.components[axis]
    }
}

impl<'a> IntoIterator for &'a IntVector {
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ── Component-wise arithmetic ──────────────────────────────────────

macro_rules! componentwise_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $apply:expr) => {
        impl $OpAssign<&IntVector> for IntVector {
            fn $op_assign(&mut self, rhs: &IntVector) {
                self.zip_apply(rhs, $apply);
            }
        }

        impl $OpAssign for IntVector {
            fn $op_assign(&mut self, rhs: IntVector) {
                self.zip_apply(&rhs, $apply);
            }
        }

        impl $Op<&IntVector> for &IntVector {
            type Output = IntVector;

            fn $op(self, rhs: &IntVector) -> IntVector {
                let mut out = self.clone();
                out.zip_apply(rhs, $apply);
                out
            }
        }

        impl $Op<&IntVector> for IntVector {
            type Output = IntVector;

            fn $op(mut self, rhs: &IntVector) -> IntVector {
                self.zip_apply(rhs, $apply);
                self
            }
        }

        impl $Op for IntVector {
            type Output = IntVector;

            fn $op(mut self, rhs: IntVector) -> IntVector {
                self.zip_apply(&rhs, $apply);
                self
            }
        }
    };
}

componentwise_op!(Add, add, AddAssign, add_assign, |a, b| a + b);
componentwise_op!(Sub, sub, SubAssign, sub_assign, |a, b| a - b);
componentwise_op!(Mul, mul, MulAssign, mul_assign, |a, b| a * b);
componentwise_op!(Div, div, DivAssign, div_assign, |a, b| a / b);

impl MulAssign<i32> for IntVector {
    fn mul_assign(&mut self, rhs: i32) {
        for c in &mut self.components {
            *c *= rhs;
        }
    }
}

impl DivAssign<i32> for IntVector {
    fn div_assign(&mut self, rhs: i32) {
        for c in &mut self.components {
            *c /= rhs;
        }
    }
}

impl Mul<i32> for &IntVector {
    type Output = IntVector;

    fn mul(self, rhs: i32) -> IntVector {
        let mut out = self.clone();
        out *= rhs;
        out
    }
}

impl Mul<i32> for IntVector {
    type Output = IntVector;

    fn mul(mut self, rhs: i32) -> IntVector {
        self *= rhs;
        self
    }
}

impl Div<i32> for &IntVector {
    type Output = IntVector;

    fn div(self, rhs: i32) -> IntVector {
        let mut out = self.clone();
        out /= rhs;
        out
    }
}

impl Div<i32> for IntVector {
    type Output = IntVector;

    fn div(mut self, rhs: i32) -> IntVector {
        self /= rhs;
        self
    }
}

impl Neg for &IntVector {
    type Output = IntVector;

    fn neg(self) -> IntVector {
        -self.clone()
    }
}

impl Neg for IntVector {
    type Output = IntVector;

    fn neg(mut self) -> IntVector {
        for c in &mut self.components {
            *c = -*c;
        }
        self
    }
}

// ── Text form ──────────────────────────────────────────────────────

impl fmt::Display for IntVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

impl FromStr for IntVector {
    type Err = CoreError;

    /// Parse the `(i0,...,in)` form. Whitespace around the parentheses
    /// and around each component is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| CoreError::parse(s, "expected parenthesised tuple"))?;
        if inner.trim().is_empty() {
            return Err(CoreError::parse(s, "tuple has no components"));
        }
        let mut components = SmallVec::new();
        for token in inner.split(',') {
            let token = token.trim();
            let value = token
                .parse::<i32>()
                .map_err(|e| CoreError::parse(s, format!("component {token:?}: {e}")))?;
            components.push(value);
        }
        Dimension::new(components.len())?;
        Ok(Self { components })
    }
}
