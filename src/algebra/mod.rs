//! Dense vector and matrix operations used by the solver.
//!
//! Vector math is provided through the [`VectorMath`] trait, implemented
//! for slices of `f64`.  Dense matrices are `nalgebra` matrices, with a
//! small set of helpers in [`dense`] for products into slices, row-major
//! reshaping of square blocks and rank-checked inversion.

mod math_traits;
mod vecmath;
pub use math_traits::*;

pub mod dense;
pub use dense::*;

pub use nalgebra::{DMatrix, DVector};

// T = transpose, N = non-transposed
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum MatrixShape {
    N,
    T,
}

#[cfg(test)]
mod tests;
