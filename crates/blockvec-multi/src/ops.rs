//! Block-wise arithmetic operators for [`MultiIntVector`].
//!
//! Every binary operator checks that both operands hold the same number
//! of blocks with the same dimension, then applies the corresponding
//! [`IntVector`] operator to each pair of blocks. Scalar operators
//! broadcast to every component of every block.
//!
//! # Panics
//!
//! A shape mismatch panics before either operand is modified. Errors in
//! individual components surface while blocks are being updated, so an
//! in-place operator may already have changed earlier blocks when it
//! panics:
//!
//! - a zero divisor in `/` or `/=` always panics;
//! - overflow in `+ - *` and negation panics in debug builds and wraps in
//!   release builds, following Rust's integer arithmetic.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use blockvec_core::IntVector;

use crate::multi_vector::MultiIntVector;

macro_rules! blockwise_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident) => {
        impl $OpAssign<&MultiIntVector> for MultiIntVector {
            fn $op_assign(&mut self, rhs: &MultiIntVector) {
                self.zip_blocks(rhs, |a, b| <IntVector as $OpAssign<&IntVector>>::$op_assign(a, b));
            }
        }

        impl $OpAssign for MultiIntVector {
            fn $op_assign(&mut self, rhs: MultiIntVector) {
                <Self as $OpAssign<&MultiIntVector>>::$op_assign(self, &rhs);
            }
        }

        impl $Op<&MultiIntVector> for &MultiIntVector {
            type Output = MultiIntVector;

            fn $op(self, rhs: &MultiIntVector) -> MultiIntVector {
                let mut out = self.clone();
                <MultiIntVector as $OpAssign<&MultiIntVector>>::$op_assign(&mut out, rhs);
                out
            }
        }

        impl $Op<&MultiIntVector> for MultiIntVector {
            type Output = MultiIntVector;

            fn $op(mut self, rhs: &MultiIntVector) -> MultiIntVector {
                <Self as $OpAssign<&MultiIntVector>>::$op_assign(&mut self, rhs);
                self
            }
        }

        impl $Op for MultiIntVector {
            type Output = MultiIntVector;

            fn $op(mut self, rhs: MultiIntVector) -> MultiIntVector {
                <Self as $OpAssign<&MultiIntVector>>::$op_assign(&mut self, &rhs);
                self
            }
        }
    };
}

blockwise_op!(Add, add, AddAssign, add_assign);
blockwise_op!(Sub, sub, SubAssign, sub_assign);
blockwise_op!(Mul, mul, MulAssign, mul_assign);
blockwise_op!(Div, div, DivAssign, div_assign);

impl MulAssign<i32> for MultiIntVector {
    fn mul_assign(&mut self, rhs: i32) {
        for block in &mut self.blocks {
            *block *= rhs;
        }
    }
}

impl DivAssign<i32> for MultiIntVector {
    fn div_assign(&mut self, rhs: i32) {
        for block in &mut self.blocks {
            *block /= rhs;
        }
    }
}

impl Mul<i32> for &MultiIntVector {
    type Output = MultiIntVector;

    fn mul(self, rhs: i32) -> MultiIntVector {
        let mut out = self.clone();
        out *= rhs;
        out
    }
}

impl Mul<i32> for MultiIntVector {
    type Output = MultiIntVector;

    fn mul(mut self, rhs: i32) -> MultiIntVector {
        self *= rhs;
        self
    }
}

impl Div<i32> for &MultiIntVector {
    type Output = MultiIntVector;

    fn div(self, rhs: i32) -> MultiIntVector {
        let mut out = self.clone();
        out /= rhs;
        out
    }
}

impl Div<i32> for MultiIntVector {
    type Output = MultiIntVector;

    fn div(mut self, rhs: i32) -> MultiIntVector {
        self /= rhs;
        self
    }
}

impl Neg for &MultiIntVector {
    type Output = MultiIntVector;

    fn neg(self) -> MultiIntVector {
        -self.clone()
    }
}

impl Neg for MultiIntVector {
    type Output = MultiIntVector;

    fn neg(mut self) -> MultiIntVector {
        for block in &mut self.blocks {
            *block = -&*block;
        }
        self
    }
}
